//! Navigation link extraction
//!
//! This module parses the base page of a documentation site and collects
//! links from its navigation regions:
//! - `<nav>` and `<header>` elements
//! - elements whose class attribute contains "nav" or "menu"
//!
//! Only same-origin links whose visible text looks like documentation are kept.

use crate::url::{resolve_link, same_origin};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Words in a link's visible text that mark it as documentation
const NAV_KEYWORDS: &[&str] = &[
    "guide",
    "api",
    "reference",
    "example",
    "tutorial",
    "docs",
    "documentation",
];

/// Anchors inside navigation regions
const NAV_LINK_SELECTOR: &str =
    r#"nav a[href], header a[href], [class*="nav"] a[href], [class*="menu"] a[href]"#;

/// A link found in a navigation region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Absolute URL of the link target
    pub url: String,
    /// Visible text of the anchor, whitespace collapsed
    pub text: String,
}

/// Extracts documentation links from the navigation regions of a page
///
/// # Link Rules
///
/// **Include:**
/// - anchors inside `<nav>`, `<header>`, `[class*=nav]`, `[class*=menu]`
/// - same origin as `base_url`
/// - visible text containing guide, api, reference, example, tutorial,
///   docs, or documentation (case-insensitive)
///
/// **Exclude:**
/// - `mailto:`, `tel:`, `javascript:` and fragment-only links
/// - duplicate targets (first occurrence wins)
///
/// # Example
///
/// ```
/// use sumi_scroll::crawler::extract_navigation_links;
/// use url::Url;
///
/// let html = r#"<nav><a href="/guide/install">Install Guide</a><a href="/pricing">Pricing</a></nav>"#;
/// let base_url = Url::parse("https://docs.example.com/").unwrap();
/// let links = extract_navigation_links(html, &base_url);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].url, "https://docs.example.com/guide/install");
/// ```
pub fn extract_navigation_links(html: &str, base_url: &Url) -> Vec<NavLink> {
    let document = Html::parse_document(html);
    let selector = match Selector::parse(NAV_LINK_SELECTOR) {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!("Invalid navigation selector: {:?}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(absolute) = resolve_link(href, base_url) else {
            continue;
        };

        if !same_origin(&absolute, base_url) {
            continue;
        }

        let text = element
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if !is_documentation_text(&text) {
            continue;
        }

        let url = absolute.to_string();
        if seen.insert(url.clone()) {
            links.push(NavLink { url, text });
        }
    }

    links
}

/// Checks whether link text mentions a documentation keyword
fn is_documentation_text(text: &str) -> bool {
    let text = text.to_lowercase();
    NAV_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}
