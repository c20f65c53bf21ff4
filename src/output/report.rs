//! Discovery report generation

use crate::category::{categorize_pages, CategoryGroups};
use crate::extract::sum_sizes;
use crate::page::{PageRecord, PageSummary};
use serde::Serialize;

/// Structure of a documentation site, without page bodies
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryReport {
    pub base_url: String,
    pub title: String,
    pub total_pages: usize,
    /// Page summaries grouped by category, in priority order
    pub categories: CategoryGroups<PageSummary>,
    pub estimated_total_size: String,
}

/// Builds a report from the pages fetched for one discovery request
///
/// # Arguments
///
/// * `base_url` - The seed URL
/// * `title` - Title of the seed page
/// * `pages` - Extracted pages in candidate order
pub fn build_report(base_url: &str, title: &str, pages: Vec<PageRecord>) -> DiscoveryReport {
    let estimated_total_size = sum_sizes(pages.iter().map(|p| p.size_estimate.as_str()));
    let total_pages = pages.len();
    let categories = categorize_pages(pages).map(|page| page.summary());

    DiscoveryReport {
        base_url: base_url.to_string(),
        title: title.to_string(),
        total_pages,
        categories,
        estimated_total_size,
    }
}
