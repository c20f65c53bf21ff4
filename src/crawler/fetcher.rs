//! HTTP fetcher implementation
//!
//! This module performs single page retrievals for discovery and
//! compilation:
//! - Building the HTTP client with the identifying user agent
//! - GET requests bounded by a per-call timeout
//! - Error classification into [`FetchError`]
//!
//! There are no retries at this layer.

use crate::config::FetcherConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Raw markup of a successfully fetched page
#[derive(Debug, Clone)]
pub struct RawPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Page body content
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```
/// use sumi_scroll::config::FetcherConfig;
/// use sumi_scroll::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent())
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a hard timeout
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | Deadline exceeded | `FetchError::Timeout` |
/// | Non-2xx status | `FetchError::HttpStatus` |
/// | DNS, connect, TLS, or body read failure | `FetchError::Unreachable` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `timeout` - Deadline covering the request and the body download
pub async fn fetch_page(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<RawPage, FetchError> {
    let timeout_ms = timeout.as_millis() as u64;

    match tokio::time::timeout(timeout, fetch_inner(client, url, timeout)).await {
        Ok(result) => result,
        Err(_) => {
            tracing::debug!("Fetch of {} timed out after {}ms", url, timeout_ms);
            Err(FetchError::Timeout { timeout_ms })
        }
    }
}

async fn fetch_inner(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<RawPage, FetchError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_error(e, timeout))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let final_url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|e| classify_error(e, timeout))?;

    Ok(RawPage {
        final_url,
        status_code: status.as_u16(),
        body,
    })
}

fn classify_error(error: reqwest::Error, timeout: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    } else if error.is_connect() {
        FetchError::Unreachable(format!("Connection failed: {}", error))
    } else {
        FetchError::Unreachable(error.to_string())
    }
}
