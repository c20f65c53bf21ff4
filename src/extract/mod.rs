//! Content extraction from raw page markup
//!
//! Extraction is a pure function of the input text. It runs in one of two
//! modes:
//! - [`ExtractMode::Structured`] converts the body to markdown and is used
//!   when compiling a document
//! - [`ExtractMode::PlainText`] flattens the body to text and is used when
//!   sizing pages for a discovery report

mod markdown;
mod metadata;
mod regions;
mod size;

pub use markdown::html_to_markdown;
pub use metadata::{extract_code_blocks, extract_description, extract_headings, extract_title};
pub use regions::{plain_text, strip_regions};
pub use size::{format_size, parse_size, structured_size, sum_sizes, STRUCTURED_SIZE_FACTOR};

use crate::page::Heading;

/// Fidelity level of body extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Markdown body, sized at 0.7 of the plain-text length
    Structured,
    /// Flat text body, sized at its own length
    PlainText,
}

impl ExtractMode {
    /// Title used when a page has neither `<title>` nor `<h1>`
    pub fn fallback_title(&self) -> &'static str {
        match self {
            Self::Structured => "Documentation",
            Self::PlainText => "Documentation Page",
        }
    }
}

/// Everything derived from one page's markup
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPage {
    pub title: String,
    pub description: Option<String>,
    pub body: String,
    pub headings: Vec<Heading>,
    pub code_blocks: Vec<String>,
    /// Estimated size in characters
    pub size_chars: usize,
}

impl ExtractedPage {
    /// Size estimate in display form
    pub fn size_estimate(&self) -> String {
        format_size(self.size_chars)
    }
}

/// Extracts title, description, body, outline, and code samples from a page
///
/// # Example
///
/// ```
/// use sumi_scroll::extract::{extract, ExtractMode};
///
/// let page = extract("<title>Widgets</title><h2>List</h2><p>Lists widgets.</p>", ExtractMode::Structured);
/// assert_eq!(page.title, "Widgets");
/// assert_eq!(page.body, "Widgets\n\n## List\n\nLists widgets.");
/// assert_eq!(page.headings.len(), 1);
/// ```
pub fn extract(html: &str, mode: ExtractMode) -> ExtractedPage {
    let content = strip_regions(html);
    let plain = plain_text(html);
    let plain_chars = plain.chars().count();

    let title = extract_title(html).unwrap_or_else(|| mode.fallback_title().to_string());

    let (body, size_chars) = match mode {
        ExtractMode::Structured => (html_to_markdown(html), structured_size(plain_chars)),
        ExtractMode::PlainText => (plain, plain_chars),
    };

    ExtractedPage {
        title,
        description: extract_description(html),
        body,
        headings: extract_headings(&content),
        code_blocks: extract_code_blocks(&content),
        size_chars,
    }
}
