//! HTML to markdown conversion
//!
//! The conversion is an ordered sequence of text rewrites:
//! region-strip, whitespace flatten, tag-to-markdown, tag-strip, decode,
//! line collapse. It is best-effort and tolerant of malformed markup.

use crate::extract::regions::{
    collapse_lines, collapse_whitespace, decode_entities, strip_regions, strip_tags,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// SAFETY: all patterns below are compile-time constants known to be valid.
#[allow(clippy::unwrap_used)]
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h([1-6])\b[^>]*>(.*?)</h[1-6]\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static PARAGRAPH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<li\b[^>]*>(.*?)</li\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:strong|b)\b[^>]*>(.*?)</(?:strong|b)\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:em|i)\b[^>]*>(.*?)</(?:em|i)\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<code\b[^>]*>(.*?)</code\s*>").unwrap());

#[allow(clippy::unwrap_used)]
static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

#[allow(clippy::unwrap_used)]
static BLOCK_CLOSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</(?:div|section|article|main|ul|ol|table|tr|blockquote|pre)\s*>").unwrap()
});

/// Converts a full HTML page to markdown-like text
///
/// # Example
///
/// ```
/// use sumi_scroll::extract::html_to_markdown;
///
/// let md = html_to_markdown("<h2>Install</h2><p>Run <code>cargo add</code></p>");
/// assert_eq!(md, "## Install\n\nRun `cargo add`");
/// ```
pub fn html_to_markdown(html: &str) -> String {
    let html = strip_regions(html);
    let html = collapse_whitespace(&html);
    let html = convert_headings(&html);
    let html = convert_paragraphs(&html);
    let html = convert_list_items(&html);
    let html = convert_inline(&html);
    let html = LINE_BREAK_RE.replace_all(&html, "\n");
    let html = BLOCK_CLOSE_RE.replace_all(&html, "\n");
    let text = decode_entities(&strip_tags(&html));
    collapse_lines(&text)
}

/// `<hN>text</hN>` becomes a standalone `#`×N line
fn convert_headings(html: &str) -> String {
    HEADING_RE
        .replace_all(html, |caps: &Captures| {
            let level: usize = caps[1].parse().unwrap_or(1);
            let text = collapse_whitespace(&strip_tags(&caps[2]));
            format!("\n\n{} {}\n\n", "#".repeat(level), text)
        })
        .into_owned()
}

/// Paragraph contents end with a blank line
fn convert_paragraphs(html: &str) -> String {
    PARAGRAPH_RE.replace_all(html, "${1}\n\n").into_owned()
}

fn convert_list_items(html: &str) -> String {
    LIST_ITEM_RE.replace_all(html, "\n- ${1}").into_owned()
}

/// Bold, italic, and inline code to their markdown markers
fn convert_inline(html: &str) -> String {
    let html = BOLD_RE.replace_all(html, "**${1}**");
    let html = ITALIC_RE.replace_all(&html, "*${1}*");
    INLINE_CODE_RE.replace_all(&html, "`${1}`").into_owned()
}
