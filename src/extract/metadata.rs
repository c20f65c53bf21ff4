//! Title, description, heading outline, and code sample extraction

use crate::extract::regions::{decode_entities, inline_text, strip_tags};
use crate::page::Heading;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum length of a code sample worth keeping
const MIN_CODE_BLOCK_CHARS: usize = 10;

/// Inclusive length bounds for a paragraph used as a fallback description
const DESCRIPTION_MIN_CHARS: usize = 50;
const DESCRIPTION_MAX_CHARS: usize = 200;

// SAFETY: all patterns below are compile-time constants known to be valid.
#[allow(clippy::unwrap_used)]
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h([1-6])\b[^>]*>(.*?)</h[1-6]\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static META_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<meta\b[^>]*>").unwrap());

#[allow(clippy::unwrap_used)]
static META_DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\bname\s*=\s*["']description["']"#).unwrap());

#[allow(clippy::unwrap_used)]
static META_CONTENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

#[allow(clippy::unwrap_used)]
static PARAGRAPH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static PRE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<pre\b[^>]*>(.*?)</pre\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<code\b[^>]*>(.*?)</code\s*>").unwrap());

/// Extracts the page title
///
/// Uses the first `<title>`, then the first `<h1>`. Returns None when
/// neither yields any text; callers supply their own fallback.
pub fn extract_title(html: &str) -> Option<String> {
    [&*TITLE_RE, &*H1_RE].iter().find_map(|re| {
        re.captures(html)
            .map(|caps| inline_text(&caps[1]))
            .filter(|title| !title.is_empty())
    })
}

/// Extracts a short description of the page
///
/// Prefers `<meta name="description">`. Falls back to the first paragraph
/// whose text length lies within the description bounds.
pub fn extract_description(html: &str) -> Option<String> {
    let from_meta = META_RE.find_iter(html).find_map(|tag| {
        let tag = tag.as_str();
        if !META_DESCRIPTION_RE.is_match(tag) {
            return None;
        }
        let caps = META_CONTENT_RE.captures(tag)?;
        let content = caps.get(1).or_else(|| caps.get(2))?.as_str();
        let content = inline_text(content);
        (!content.is_empty()).then_some(content)
    });

    from_meta.or_else(|| {
        PARAGRAPH_RE.captures_iter(html).find_map(|caps| {
            let text = inline_text(&caps[1]);
            let len = text.chars().count();
            (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS)
                .contains(&len)
                .then_some(text)
        })
    })
}

/// Extracts every `<h1>`..`<h6>` in document order
///
/// Headings without text are skipped.
pub fn extract_headings(html: &str) -> Vec<Heading> {
    HEADING_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let level: u8 = caps[1].parse().ok()?;
            let text = inline_text(&caps[2]);
            (!text.is_empty()).then_some(Heading { level, text })
        })
        .collect()
}

/// Extracts code samples
///
/// `<pre>` blocks come first in document order, followed by `<code>`
/// elements that sit outside any `<pre>`. Line structure inside a sample is
/// kept; samples shorter than ten characters are dropped.
pub fn extract_code_blocks(html: &str) -> Vec<String> {
    let mut blocks: Vec<String> = PRE_RE
        .captures_iter(html)
        .filter_map(|caps| clean_code(&caps[1]))
        .collect();

    let outside_pre = PRE_RE.replace_all(html, "");
    blocks.extend(
        CODE_RE
            .captures_iter(&outside_pre)
            .filter_map(|caps| clean_code(&caps[1])),
    );

    blocks
}

fn clean_code(inner: &str) -> Option<String> {
    let code = decode_entities(&strip_tags(inner)).trim().to_string();
    (code.chars().count() >= MIN_CODE_BLOCK_CHARS).then_some(code)
}
