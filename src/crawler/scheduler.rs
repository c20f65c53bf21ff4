//! Batch scheduler for concurrent page fetching
//!
//! This module handles:
//! - Running one fetch+extract task per candidate URL
//! - Capping in-flight fetches with a semaphore
//! - Collecting per-task results into index-owned slots
//! - Separating successes from failures without losing either

use crate::crawler::fetcher::fetch_page;
use crate::extract::{extract, ExtractMode};
use crate::page::PageRecord;
use crate::FetchError;
use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// A page that could not be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub url: String,
    pub error: FetchError,
}

/// Result of a batch, in candidate order
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Successfully extracted pages, in the order their URLs were given
    pub pages: Vec<PageRecord>,

    /// Pages that were dropped, kept for diagnostics
    pub failures: Vec<PageFailure>,
}

/// Scheduler runs fetch+extract tasks over a list of URLs
///
/// Every URL becomes one task. Tasks run concurrently, bounded by the
/// semaphore, and each writes only to its own result slot; output order
/// never depends on completion order.
pub struct Scheduler {
    client: Client,
    semaphore: Arc<Semaphore>,
    timeout: Duration,
}

impl Scheduler {
    /// Creates a new scheduler
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client shared by all tasks
    /// * `max_concurrent` - Maximum number of fetches in flight
    /// * `timeout` - Per-page fetch timeout
    pub fn new(client: Client, max_concurrent: usize, timeout: Duration) -> Self {
        Self {
            client,
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            timeout,
        }
    }

    /// Fetches and extracts every URL, isolating failures
    pub async fn fetch_all(&self, urls: &[String], mode: ExtractMode) -> BatchOutcome {
        let tasks = urls.iter().map(|url| self.fetch_one(url, mode));
        let slots: Vec<Result<PageRecord, FetchError>> = join_all(tasks).await;

        let mut outcome = BatchOutcome::default();
        for (url, slot) in urls.iter().zip(slots) {
            match slot {
                Ok(page) => outcome.pages.push(page),
                Err(error) => {
                    tracing::warn!("Dropping {}: {}", url, error);
                    outcome.failures.push(PageFailure {
                        url: url.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            "Batch complete: {} pages extracted, {} failed",
            outcome.pages.len(),
            outcome.failures.len()
        );

        outcome
    }

    async fn fetch_one(&self, url: &str, mode: ExtractMode) -> Result<PageRecord, FetchError> {
        let _permit = self.semaphore.acquire().await.ok();

        tracing::debug!("Fetching {}", url);
        let raw = fetch_page(&self.client, url, self.timeout).await?;
        Ok(PageRecord::from_extracted(url, extract(&raw.body, mode)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetcherConfig;
    use crate::crawler::fetcher::build_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn scheduler(max_concurrent: usize) -> Scheduler {
        let client = build_http_client(&FetcherConfig::default()).unwrap();
        Scheduler::new(client, max_concurrent, Duration::from_secs(5))
    }

    async fn mount_page(server: &MockServer, route: &str, title: &str, delay_ms: u64) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!("<title>{}</title><p>Body of {}</p>", title, title))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_results_keep_input_order() {
        let server = MockServer::start().await;
        mount_page(&server, "/slow", "Slow", 300).await;
        mount_page(&server, "/fast", "Fast", 0).await;
        mount_page(&server, "/medium", "Medium", 100).await;

        let urls: Vec<String> = ["/slow", "/fast", "/medium"]
            .iter()
            .map(|p| format!("{}{}", server.uri(), p))
            .collect();

        let outcome = scheduler(10).fetch_all(&urls, ExtractMode::PlainText).await;

        let titles: Vec<_> = outcome.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Slow", "Fast", "Medium"]);
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_isolated() {
        let server = MockServer::start().await;
        mount_page(&server, "/ok", "Ok", 0).await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let urls = vec![
            format!("{}/broken", server.uri()),
            format!("{}/ok", server.uri()),
            format!("{}/missing", server.uri()),
        ];

        let outcome = scheduler(2).fetch_all(&urls, ExtractMode::Structured).await;

        assert_eq!(outcome.pages.len(), 1);
        assert_eq!(outcome.pages[0].title, "Ok");
        assert_eq!(outcome.failures.len(), 2);
        assert_eq!(outcome.failures[0].url, urls[0]);
        assert!(matches!(
            outcome.failures[1].error,
            FetchError::HttpStatus { code: 404, .. }
        ));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let outcome = scheduler(1).fetch_all(&[], ExtractMode::PlainText).await;
        assert!(outcome.pages.is_empty());
        assert!(outcome.failures.is_empty());
    }
}
