//! Request adapter
//!
//! Wraps the coordinator's two operations in success/failure envelopes.
//! Failures never cross this boundary as errors: they are reported as a
//! human-readable `error` string.

use crate::crawler::Coordinator;
use crate::output::{CompiledDocument, DiscoveryReport};
use crate::ScrollError;
use serde::Serialize;

/// Envelope returned by [`discover`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DiscoveryReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Envelope returned by [`compile`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CompileMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileMetadata {
    pub title: String,
    pub source_url: String,
    pub compiled_at: String,
    pub total_pages: usize,
}

impl DiscoverResponse {
    fn failure(error: &ScrollError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<DiscoveryReport> for DiscoverResponse {
    fn from(report: DiscoveryReport) -> Self {
        Self {
            success: true,
            data: Some(report),
            error: None,
        }
    }
}

impl CompileResponse {
    fn failure(error: &ScrollError) -> Self {
        Self {
            success: false,
            content: None,
            metadata: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<CompiledDocument> for CompileResponse {
    fn from(document: CompiledDocument) -> Self {
        Self {
            success: true,
            metadata: Some(CompileMetadata {
                title: document.title,
                source_url: document.source_url,
                compiled_at: document.compiled_at,
                total_pages: document.total_pages,
            }),
            content: Some(document.content),
            error: None,
        }
    }
}

fn required_url(url: Option<&str>) -> Result<&str, ScrollError> {
    url.filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ScrollError::InvalidInput("URL is required".to_string()))
}

/// Handles a discover request
///
/// # Example
///
/// ```no_run
/// use sumi_scroll::api;
/// use sumi_scroll::config::Config;
/// use sumi_scroll::crawler::Coordinator;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let coordinator = Coordinator::new(Config::default())?;
/// let response = api::discover(&coordinator, Some("https://docs.example.com")).await;
/// println!("{}", serde_json::to_string_pretty(&response)?);
/// # Ok(())
/// # }
/// ```
pub async fn discover(coordinator: &Coordinator, url: Option<&str>) -> DiscoverResponse {
    let result = match required_url(url) {
        Ok(url) => coordinator.discover(url).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => report.into(),
        Err(e) => {
            tracing::error!("Discover request failed: {}", e);
            DiscoverResponse::failure(&e)
        }
    }
}

/// Handles a compile request
///
/// `selected_pages`, when present and non-empty, replaces sitemap discovery.
pub async fn compile(
    coordinator: &Coordinator,
    url: Option<&str>,
    selected_pages: Option<&[String]>,
) -> CompileResponse {
    let result = match required_url(url) {
        Ok(url) => {
            coordinator
                .compile(url, selected_pages.unwrap_or_default())
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(document) => document.into(),
        Err(e) => {
            tracing::error!("Compile request failed: {}", e);
            CompileResponse::failure(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    fn coordinator() -> Coordinator {
        Coordinator::new(Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_url() {
        let response = discover(&coordinator(), None).await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("URL is required"));

        let response = compile(&coordinator(), Some("  "), None).await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("URL is required"));
        assert!(response.content.is_none());
    }

    #[tokio::test]
    async fn test_malformed_url() {
        let response = discover(&coordinator(), Some("docs.example.com")).await;
        assert_eq!(response.error.as_deref(), Some("Invalid URL format"));

        let response = compile(&coordinator(), Some("ftp://example.com"), None).await;
        assert_eq!(response.error.as_deref(), Some("Invalid URL format"));
    }

    #[test]
    fn test_failure_serialization_skips_absent_fields() {
        let err = ScrollError::InvalidInput("URL is required".to_string());
        let value = serde_json::to_value(CompileResponse::failure(&err)).unwrap();
        assert_eq!(value, json!({"success": false, "error": "URL is required"}));
    }

    #[test]
    fn test_compile_response_from_document() {
        let document = CompiledDocument {
            title: "Widgets".to_string(),
            source_url: "https://docs.example.com/".to_string(),
            compiled_at: "2026-01-01T00:00:00.000Z".to_string(),
            total_pages: 2,
            content: "# Widgets".to_string(),
        };

        let value = serde_json::to_value(CompileResponse::from(document)).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "content": "# Widgets",
                "metadata": {
                    "title": "Widgets",
                    "sourceUrl": "https://docs.example.com/",
                    "compiledAt": "2026-01-01T00:00:00.000Z",
                    "totalPages": 2
                }
            })
        );
    }
}
