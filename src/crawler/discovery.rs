//! Candidate URL discovery
//!
//! Two independent strategies find documentation URLs for a seed:
//! - the sitemap strategy probes well-known sitemap locations
//! - the navigation strategy scans the base page's navigation regions
//!
//! A failing strategy contributes nothing; discovery itself never fails.

use crate::config::FetcherConfig;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::extract_navigation_links;
use crate::url::{filter_documentation_urls, origin_of, CandidateSet};
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Sitemap locations probed, in order, relative to the site origin
pub const SITEMAP_PATHS: [&str; 3] = ["/sitemap.xml", "/sitemap_index.xml", "/docs/sitemap.xml"];

/// Which discovery strategies to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategies {
    pub sitemap: bool,
    pub navigation: bool,
}

impl Strategies {
    /// Sitemap and navigation, used by discovery reports
    pub fn full() -> Self {
        Self {
            sitemap: true,
            navigation: true,
        }
    }

    /// Sitemap only, used by compilation
    pub fn sitemap_only() -> Self {
        Self {
            sitemap: true,
            navigation: false,
        }
    }
}

/// Runs the enabled strategies concurrently and merges their results
///
/// The returned set is `[seed] ++ sitemap ++ navigation`, deduplicated,
/// with the seed first.
pub async fn discover_candidates(
    client: &Client,
    seed: &Url,
    config: &FetcherConfig,
    strategies: Strategies,
) -> CandidateSet {
    let sitemap_timeout = Duration::from_millis(config.sitemap_timeout);
    let navigation_timeout = Duration::from_millis(config.navigation_timeout);

    let sitemap = async {
        if strategies.sitemap {
            discover_sitemap_urls(client, seed, sitemap_timeout).await
        } else {
            Vec::new()
        }
    };
    let navigation = async {
        if strategies.navigation {
            discover_navigation_urls(client, seed, navigation_timeout).await
        } else {
            Vec::new()
        }
    };

    let (sitemap_urls, navigation_urls) = tokio::join!(sitemap, navigation);

    tracing::info!(
        "Discovered {} sitemap URLs and {} navigation URLs for {}",
        sitemap_urls.len(),
        navigation_urls.len(),
        seed
    );

    let mut candidates = CandidateSet::new(seed);
    candidates.extend(&sitemap_urls);
    candidates.extend(&navigation_urls);
    candidates
}

/// Returns the documentation URLs listed in the first reachable sitemap
///
/// Each location in [`SITEMAP_PATHS`] is tried in order. The first one that
/// answers 2xx is used and the rest are never requested. Exhausting every
/// location yields an empty list.
pub async fn discover_sitemap_urls(client: &Client, seed: &Url, timeout: Duration) -> Vec<String> {
    let origin = origin_of(seed);

    for path in SITEMAP_PATHS {
        let sitemap_url = format!("{}{}", origin, path);

        match fetch_page(client, &sitemap_url, timeout).await {
            Ok(page) => {
                let locs = parse_sitemap_locs(&page.body);
                let total = locs.len();
                let kept = filter_documentation_urls(locs);
                tracing::debug!(
                    "Sitemap {} listed {} URLs, {} kept after filtering",
                    sitemap_url,
                    total,
                    kept.len()
                );
                return kept;
            }
            Err(e) => {
                tracing::debug!("Sitemap probe {} failed: {}", sitemap_url, e);
            }
        }
    }

    tracing::debug!("No sitemap found for {}", origin);
    Vec::new()
}

/// Returns documentation links from the navigation regions of the seed page
///
/// Links resolve against the URL the seed redirected to, if any.
pub async fn discover_navigation_urls(
    client: &Client,
    seed: &Url,
    timeout: Duration,
) -> Vec<String> {
    match fetch_page(client, seed.as_str(), timeout).await {
        Ok(page) => {
            let base = Url::parse(&page.final_url).unwrap_or_else(|_| seed.clone());
            extract_navigation_links(&page.body, &base)
                .into_iter()
                .map(|link| link.url)
                .collect()
        }
        Err(e) => {
            tracing::warn!("Navigation scan of {} failed: {}", seed, e);
            Vec::new()
        }
    }
}

/// Extracts the text of every `<loc>` element in a sitemap
///
/// Works for both `<urlset>` and `<sitemapindex>` documents. Parsing stops
/// at the first XML error and keeps the locations read up to that point.
pub fn parse_sitemap_locs(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locs = Vec::new();
    let mut in_loc = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"loc" => in_loc = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"loc" => in_loc = false,
            Ok(Event::Text(e)) if in_loc => match e.unescape() {
                Ok(text) => push_loc(&mut locs, &text),
                Err(err) => tracing::debug!("Skipping undecodable sitemap entry: {}", err),
            },
            Ok(Event::CData(e)) if in_loc => {
                push_loc(&mut locs, &String::from_utf8_lossy(&e.into_inner()));
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::warn!(
                    "Sitemap parse error at position {}: {}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
            _ => {}
        }
    }

    locs
}

fn push_loc(locs: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        locs.push(text.to_string());
    }
}
