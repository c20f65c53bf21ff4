//! Request coordinator - discovery and compilation orchestration
//!
//! This module contains the two request flows:
//! - discover: candidate discovery, concurrent plain-text extraction,
//!   categorization, and size aggregation into a report
//! - compile: sitemap discovery, concurrent structured extraction, and
//!   assembly of the merged document
//!
//! In both flows only the seed page is mandatory. Every other page and
//! every discovery strategy may fail without failing the request.

use crate::config::Config;
use crate::crawler::discovery::{discover_candidates, Strategies};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::scheduler::Scheduler;
use crate::extract::{extract, ExtractMode};
use crate::output::{assemble_document, build_report, CompiledDocument, DiscoveryReport};
use crate::page::PageRecord;
use crate::url::{parse_seed_url, resolve_link, CandidateSet};
use crate::ScrollError;
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main coordinator structure
///
/// Holds only configuration and the HTTP client; nothing is carried over
/// from one request to the next.
#[derive(Clone)]
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScrollError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, ScrollError> {
        let client = build_http_client(&config.fetcher)?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// The configuration this coordinator runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Produces a discovery report for a documentation site
    ///
    /// Runs sitemap and navigation discovery alongside the seed page fetch,
    /// then extracts up to `discovery-max-pages` pages concurrently.
    ///
    /// # Returns
    ///
    /// * `Ok(DiscoveryReport)` - Report over every page that could be fetched
    /// * `Err(ScrollError::InvalidInput)` - The seed URL is malformed
    /// * `Err(ScrollError::MainPageUnreachable)` - The seed page failed
    pub async fn discover(&self, seed_url: &str) -> Result<DiscoveryReport, ScrollError> {
        let seed = parse_seed_url(seed_url)?;
        tracing::info!("Discovering documentation structure of {}", seed);

        // A failed main page abandons discovery still in flight
        let (candidates, main_page) = tokio::try_join!(
            async {
                Ok::<_, ScrollError>(discover_candidates(
                    &self.client,
                    &seed,
                    &self.config.fetcher,
                    Strategies::full(),
                )
                .await)
            },
            self.fetch_main_page(&seed, ExtractMode::PlainText)
        )?;

        let urls = candidates.capped(self.config.limits.discovery_max_pages);
        tracing::info!(
            "{} candidate URLs found, fetching {}",
            candidates.len(),
            urls.len()
        );

        let title = main_page.title.clone();
        let pages = self.fetch_remaining(main_page, &urls, ExtractMode::PlainText).await;

        let report = build_report(seed.as_str(), &title, pages);
        tracing::info!(
            "Discovery of {} complete: {} pages, {}",
            seed,
            report.total_pages,
            report.estimated_total_size
        );

        Ok(report)
    }

    /// Compiles a documentation site into a single document
    ///
    /// Candidates come from the sitemap, or from `selected_pages` when that
    /// list is non-empty. Up to `compile-max-pages` pages are extracted in
    /// structured mode and merged, main page first.
    ///
    /// # Returns
    ///
    /// * `Ok(CompiledDocument)` - The merged document
    /// * `Err(ScrollError::InvalidInput)` - The seed URL is malformed
    /// * `Err(ScrollError::MainPageUnreachable)` - The seed page failed
    /// * `Err(ScrollError::EmptyDocument)` - No page yielded any content
    pub async fn compile(
        &self,
        seed_url: &str,
        selected_pages: &[String],
    ) -> Result<CompiledDocument, ScrollError> {
        let seed = parse_seed_url(seed_url)?;
        tracing::info!("Compiling documentation from {}", seed);

        let candidates = async {
            let candidates = if selected_pages.is_empty() {
                discover_candidates(
                    &self.client,
                    &seed,
                    &self.config.fetcher,
                    Strategies::sitemap_only(),
                )
                .await
            } else {
                selected_candidates(&seed, selected_pages)
            };
            Ok::<_, ScrollError>(candidates)
        };

        let (candidates, main_page) = tokio::try_join!(
            candidates,
            self.fetch_main_page(&seed, ExtractMode::Structured)
        )?;

        let urls = candidates.capped(self.config.limits.compile_max_pages);
        tracing::info!(
            "{} candidate URLs found, compiling {}",
            candidates.len(),
            urls.len()
        );

        let pages = self.fetch_remaining(main_page, &urls, ExtractMode::Structured).await;

        if pages.iter().all(|page| page.body_text.is_empty()) {
            return Err(ScrollError::EmptyDocument {
                url: seed.to_string(),
            });
        }

        let document = assemble_document(&pages, seed.as_str(), Utc::now());
        tracing::info!(
            "Compiled {} pages from {} ({} chars)",
            document.total_pages,
            seed,
            document.content.chars().count()
        );

        Ok(document)
    }

    /// Fetches the seed page; its failure fails the whole request
    async fn fetch_main_page(&self, seed: &Url, mode: ExtractMode) -> Result<PageRecord, ScrollError> {
        let timeout = Duration::from_millis(self.config.fetcher.main_page_timeout);

        match fetch_page(&self.client, seed.as_str(), timeout).await {
            Ok(raw) => Ok(PageRecord::from_extracted(seed.as_str(), extract(&raw.body, mode))),
            Err(source) => {
                tracing::error!("Main page {} unreachable: {}", seed, source);
                Err(ScrollError::MainPageUnreachable {
                    url: seed.to_string(),
                    source,
                })
            }
        }
    }

    /// Fetches every capped candidate after the seed and prepends the main page
    ///
    /// The seed occupies the first slot of `urls` and is never fetched twice.
    async fn fetch_remaining(
        &self,
        main_page: PageRecord,
        urls: &[String],
        mode: ExtractMode,
    ) -> Vec<PageRecord> {
        let scheduler = Scheduler::new(
            self.client.clone(),
            self.config.limits.max_concurrent_fetches,
            Duration::from_millis(self.config.fetcher.page_timeout),
        );

        let rest = urls.get(1..).unwrap_or_default();
        let outcome = scheduler.fetch_all(rest, mode).await;

        if !outcome.failures.is_empty() {
            tracing::debug!(
                "Dropped pages: {}",
                outcome
                    .failures
                    .iter()
                    .map(|f| f.url.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let mut pages = Vec::with_capacity(outcome.pages.len() + 1);
        pages.push(main_page);
        pages.extend(outcome.pages);
        pages
    }
}

/// Builds the candidate set from explicitly selected pages
///
/// Relative entries resolve against the seed. The seed stays first.
fn selected_candidates(seed: &Url, selected_pages: &[String]) -> CandidateSet {
    let mut candidates = CandidateSet::new(seed);
    for page in selected_pages {
        match resolve_link(page, seed) {
            Some(url) => {
                candidates.insert(url.as_str());
            }
            None => tracing::debug!("Ignoring selected page {}", page),
        }
    }
    candidates
}

/// Runs a discovery request with a fresh coordinator
///
/// # Example
///
/// ```no_run
/// use sumi_scroll::config::Config;
/// use sumi_scroll::crawler::discover;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = discover(Config::default(), "https://docs.example.com").await?;
/// println!("{} pages, {}", report.total_pages, report.estimated_total_size);
/// # Ok(())
/// # }
/// ```
pub async fn discover(config: Config, seed_url: &str) -> Result<DiscoveryReport, ScrollError> {
    Coordinator::new(config)?.discover(seed_url).await
}

/// Runs a compile request with a fresh coordinator
pub async fn compile(
    config: Config,
    seed_url: &str,
    selected_pages: &[String],
) -> Result<CompiledDocument, ScrollError> {
    Coordinator::new(config)?
        .compile(seed_url, selected_pages)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinator_creation() {
        let coordinator = Coordinator::new(Config::default()).unwrap();
        assert_eq!(coordinator.config().limits.compile_max_pages, 15);
    }

    #[test]
    fn test_selected_candidates() {
        let seed = Url::parse("https://docs.example.com/").unwrap();
        let selected = vec![
            "/api/widgets".to_string(),
            "https://docs.example.com/".to_string(),
            "https://docs.example.com/api/widgets".to_string(),
            "mailto:docs@example.com".to_string(),
            "guides/setup".to_string(),
        ];

        let candidates = selected_candidates(&seed, &selected);
        assert_eq!(
            candidates.as_slice(),
            &[
                "https://docs.example.com/".to_string(),
                "https://docs.example.com/api/widgets".to_string(),
                "https://docs.example.com/guides/setup".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_seed_rejected_without_io() {
        let coordinator = Coordinator::new(Config::default()).unwrap();

        let err = coordinator.discover("not a url").await.unwrap_err();
        assert!(matches!(err, ScrollError::InvalidInput(_)));

        let err = coordinator.compile("", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "URL is required");
    }
}
