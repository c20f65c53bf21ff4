//! Compiled document assembly
//!
//! This module merges extracted pages into one markdown document:
//! header, table of contents, an Overview section for the main page, and one
//! section per additional page with its code examples.

use crate::page::PageRecord;
use chrono::{DateTime, SecondsFormat, Utc};

/// Headings listed under each table of contents entry
const TOC_HEADINGS_PER_PAGE: usize = 5;

/// Characters trimmed from a section title after removing the main title
const TITLE_SEPARATORS: &[char] = &['-', '|', ':', '—', '–', '·', '•'];

/// A merged documentation document
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledDocument {
    pub title: String,
    pub source_url: String,
    /// ISO-8601 timestamp shared by the whole document
    pub compiled_at: String,
    pub total_pages: usize,
    pub content: String,
}

/// Formats a timestamp the way compiled documents carry it
pub fn format_compiled_at(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Derives a table of contents anchor from a title
///
/// Lowercases, turns whitespace runs into single hyphens, drops every
/// character outside `[a-z0-9-]`, then squeezes repeated hyphens.
///
/// # Examples
///
/// ```
/// use sumi_scroll::output::anchor_slug;
///
/// assert_eq!(anchor_slug("Getting Started"), "getting-started");
/// assert_eq!(anchor_slug("Overview — Widgets API"), "overview-widgets-api");
/// ```
pub fn anchor_slug(title: &str) -> String {
    let hyphenated = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    let filtered: String = hyphenated
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    filtered
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Heading text for a non-main page section
///
/// The main title is removed from the page title along with any separator
/// left dangling; `Page N` is used when nothing remains.
pub fn section_title(page_title: &str, main_title: &str, position: usize) -> String {
    let stripped = remove_main_title(page_title, main_title.trim());

    let trimmed =
        stripped.trim_matches(|c: char| c.is_whitespace() || TITLE_SEPARATORS.contains(&c));

    if trimmed.is_empty() {
        format!("Page {}", position)
    } else {
        trimmed.to_string()
    }
}

/// Removes the first whole-word occurrence of `main_title`
///
/// Matches inside a longer word are skipped. Whitespace left around the
/// removed text is collapsed to a single space.
fn remove_main_title(page_title: &str, main_title: &str) -> String {
    if main_title.is_empty() {
        return page_title.to_string();
    }

    let is_boundary = |c: Option<char>| c.map_or(true, |c| !c.is_alphanumeric());

    for (start, matched) in page_title.match_indices(main_title) {
        let end = start + matched.len();
        if is_boundary(page_title[..start].chars().next_back())
            && is_boundary(page_title[end..].chars().next())
        {
            let rest = format!("{} {}", &page_title[..start], &page_title[end..]);
            return rest.split_whitespace().collect::<Vec<_>>().join(" ");
        }
    }

    page_title.to_string()
}

/// Assembles the compiled document
///
/// The first page is the main page and is rendered as the Overview section.
/// The rest follow in the order given. `compiled_at` is captured once by the
/// caller and shared by every part of the document.
///
/// # Arguments
///
/// * `pages` - Main page first, then the other pages in candidate order
/// * `source_url` - The seed URL
/// * `compiled_at` - Compilation timestamp
pub fn assemble_document(
    pages: &[PageRecord],
    source_url: &str,
    compiled_at: DateTime<Utc>,
) -> CompiledDocument {
    let compiled_at = format_compiled_at(compiled_at);
    let main_title = pages
        .first()
        .map(|page| page.title.clone())
        .unwrap_or_else(|| "Documentation".to_string());

    let mut md = String::new();

    // Header
    md.push_str(&format!("# {}\n\n", main_title));
    md.push_str(&format!("> **Source**: {}\n", source_url));
    md.push_str("> **Format**: Documentation compiled for AI consumption\n");
    md.push_str(&format!("> **Pages**: {}\n", pages.len()));
    md.push_str(&format!("> **Compiled**: {}\n\n", compiled_at));

    md.push_str(&format_table_of_contents(pages));
    md.push_str("---\n\n");

    for (index, page) in pages.iter().enumerate() {
        let heading = if index == 0 {
            "Overview".to_string()
        } else {
            section_title(&page.title, &main_title, index + 1)
        };

        md.push_str(&format!("## {}\n\n", heading));
        md.push_str(&format!("*Source: {}*\n\n", page.url));

        if !page.body_text.is_empty() {
            md.push_str(&page.body_text);
            md.push_str("\n\n");
        }

        if !page.code_blocks.is_empty() {
            md.push_str("### Code Examples\n\n");
            for code in &page.code_blocks {
                md.push_str(&format!("```\n{}\n```\n\n", code));
            }
        }

        md.push_str("---\n\n");
    }

    CompiledDocument {
        title: main_title,
        source_url: source_url.to_string(),
        compiled_at,
        total_pages: pages.len(),
        content: md.trim_end().to_string() + "\n",
    }
}

/// Numbered table of contents with up to five headings per page
fn format_table_of_contents(pages: &[PageRecord]) -> String {
    let mut md = String::from("## Table of Contents\n\n");

    for (index, page) in pages.iter().enumerate() {
        let title = if index == 0 { "Overview" } else { page.title.as_str() };
        md.push_str(&format!("{}. [{}](#{})\n", index + 1, title, anchor_slug(title)));

        for heading in page.headings.iter().take(TOC_HEADINGS_PER_PAGE) {
            let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
            md.push_str(&format!("{}- {}\n", indent, heading.text));
        }
    }

    md.push('\n');
    md
}
