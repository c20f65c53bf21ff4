//! Region stripping and text normalization stages
//!
//! Each function takes the whole document as a string and returns a new
//! string; none of them depend on a parsed tree.

use once_cell::sync::Lazy;
use regex::Regex;

/// Elements whose entire contents never belong to the page body
const STRIPPED_REGIONS: &[&str] = &["script", "style", "nav", "footer", "header"];

// SAFETY: all patterns below are compile-time constants known to be valid.
#[allow(clippy::unwrap_used)]
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

#[allow(clippy::unwrap_used)]
static REGION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    STRIPPED_REGIONS
        .iter()
        .map(|tag| Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")).unwrap())
        .collect()
});

#[allow(clippy::unwrap_used)]
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

#[allow(clippy::unwrap_used)]
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[allow(clippy::unwrap_used)]
static HORIZONTAL_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());

#[allow(clippy::unwrap_used)]
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Removes comments and the script/style/nav/footer/header regions
///
/// Postcondition: none of the stripped elements' contents remain. Unclosed
/// regions are left in place and later lose only their tags.
pub fn strip_regions(html: &str) -> String {
    let mut out = COMMENT_RE.replace_all(html, "").into_owned();
    for re in REGION_RES.iter() {
        out = re.replace_all(&out, "").into_owned();
    }
    out
}

/// Removes every remaining tag, keeping the text between them
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Decodes HTML character references (`&amp;`, `&#39;`, `&nbsp;`, ...)
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Collapses every whitespace run, newlines included, to a single space
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Collapses whitespace within lines while keeping line breaks
///
/// Horizontal runs become one space, lines are trimmed, and three or more
/// consecutive newlines become a single blank line.
pub fn collapse_lines(text: &str) -> String {
    let spaced = HORIZONTAL_WS_RE.replace_all(text, " ");
    let trimmed = spaced
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    BLANK_RUN_RE.replace_all(&trimmed, "\n\n").trim().to_string()
}

/// Tag-strips, decodes, and collapses a fragment into one line of text
pub fn inline_text(fragment: &str) -> String {
    collapse_whitespace(&decode_entities(&strip_tags(fragment)))
}

/// Plain-text rendition of a whole page
pub fn plain_text(html: &str) -> String {
    collapse_whitespace(&decode_entities(&strip_tags(&strip_regions(html))))
}
