//! Page records produced by a single discover or compile request

use crate::category::{categorize_url, Category};
use crate::extract::{format_size, ExtractedPage};
use serde::Serialize;

/// One entry of a page's heading outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading level, 1 through 6
    pub level: u8,
    pub text: String,
}

/// A successfully fetched and extracted page
///
/// Built once per page and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    /// Display-formatted size estimate, e.g. `4.5k chars`
    pub size_estimate: String,
    pub body_text: String,
    pub headings: Vec<Heading>,
    pub code_blocks: Vec<String>,
}

impl PageRecord {
    /// Builds a record from extracted content, categorizing by URL
    pub fn from_extracted(url: impl Into<String>, page: ExtractedPage) -> Self {
        let url = url.into();
        Self {
            category: categorize_url(&url),
            size_estimate: format_size(page.size_chars),
            url,
            title: page.title,
            description: page.description,
            body_text: page.body,
            headings: page.headings,
            code_blocks: page.code_blocks,
        }
    }

    /// Metadata-only projection used in discovery reports
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            url: self.url.clone(),
            title: self.title.clone(),
            category: self.category,
            description: self.description.clone(),
            estimated_size: self.size_estimate.clone(),
        }
    }
}

/// Page metadata as reported by discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub url: String,
    pub title: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub estimated_size: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract, ExtractMode};

    #[test]
    fn test_record_from_extracted() {
        let extracted = extract(
            "<title>Widgets</title>\n<p>Widget list.</p>",
            ExtractMode::PlainText,
        );
        let record = PageRecord::from_extracted("https://x.com/api/widgets", extracted);

        assert_eq!(record.category, Category::ApiReference);
        assert_eq!(record.title, "Widgets");
        assert_eq!(record.size_estimate, "20 chars");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = PageSummary {
            url: "https://x.com/docs".to_string(),
            title: "Docs".to_string(),
            category: Category::GeneralDocumentation,
            description: None,
            estimated_size: "12 chars".to_string(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["estimatedSize"], "12 chars");
        assert_eq!(json["category"], "General Documentation");
        assert!(json.get("description").is_none());
    }
}
