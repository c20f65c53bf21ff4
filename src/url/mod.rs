//! URL handling module for Sumi-Scroll
//!
//! This module provides seed URL validation, origin derivation, link
//! resolution, the ordered candidate set, and the documentation path filter.

mod candidates;
mod filter;

use crate::ScrollError;
use url::Url;

// Re-export main types
pub use candidates::CandidateSet;
pub use filter::{filter_documentation_urls, is_documentation_path};

/// Parses and validates a user-supplied seed URL
///
/// Only absolute `http` and `https` URLs are accepted.
///
/// # Returns
///
/// * `Ok(Url)` - The parsed seed URL
/// * `Err(ScrollError::InvalidInput)` - The input is blank or not a valid URL
///
/// # Examples
///
/// ```
/// use sumi_scroll::url::parse_seed_url;
///
/// assert!(parse_seed_url("https://docs.example.com").is_ok());
/// assert!(parse_seed_url("   ").is_err());
/// assert!(parse_seed_url("not a url").is_err());
/// assert!(parse_seed_url("ftp://example.com").is_err());
/// ```
pub fn parse_seed_url(input: &str) -> Result<Url, ScrollError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScrollError::InvalidInput("URL is required".to_string()));
    }

    let url = Url::parse(input)
        .map_err(|_| ScrollError::InvalidInput("Invalid URL format".to_string()))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ScrollError::InvalidInput("Invalid URL format".to_string()));
    }

    Ok(url)
}

/// Returns the `scheme://host[:port]` origin of a URL, without a trailing slash
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Returns true if both URLs share scheme, host, and port
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.origin() == b.origin()
}

/// Resolves an href against a base URL
///
/// Returns None for links that can never be documentation pages:
/// - `javascript:`, `mailto:`, `tel:` and `data:` schemes
/// - fragment-only links
/// - anything that does not resolve to an http(s) URL
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    let absolute = base_url.join(href).ok()?;
    matches!(absolute.scheme(), "http" | "https").then_some(absolute)
}
