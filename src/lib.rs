//! Sumi-Scroll: a documentation site compiler
//!
//! This crate discovers the pages of a documentation website, fetches them
//! concurrently, extracts their content, and merges them into a single
//! document suitable for AI consumption.

pub mod api;
pub mod category;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod page;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Scroll operations
#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    InvalidInput(String),

    /// The seed page could not be fetched; the message is the fetch failure itself
    #[error("{source}")]
    MainPageUnreachable { url: String, source: FetchError },

    #[error("No pages could be compiled from {url}")]
    EmptyDocument { url: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Failure of a single page retrieval
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP {code}: {status_text}")]
    HttpStatus { code: u16, status_text: String },

    #[error("Unreachable: {0}")]
    Unreachable(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Sumi-Scroll operations
pub type Result<T> = std::result::Result<T, ScrollError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use category::{categorize_pages, categorize_url, Category, CategoryGroups};
pub use config::Config;
pub use crawler::{compile, discover, Coordinator};
pub use extract::{format_size, parse_size, ExtractMode, ExtractedPage};
pub use output::{CompiledDocument, DiscoveryReport};
pub use page::{Heading, PageRecord, PageSummary};
