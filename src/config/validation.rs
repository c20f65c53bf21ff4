use crate::config::types::{Config, FetcherConfig, LimitsConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_limits_config(&config.limits)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.client_name.is_empty() {
        return Err(ConfigError::Validation(
            "client_name cannot be empty".to_string(),
        ));
    }

    if !config
        .client_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "client_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.client_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::Validation(format!("Invalid contact_url: {}", e)))?;

    for (name, value) in [
        ("sitemap_timeout", config.sitemap_timeout),
        ("navigation_timeout", config.navigation_timeout),
        ("main_page_timeout", config.main_page_timeout),
        ("page_timeout", config.page_timeout),
    ] {
        validate_timeout(name, value)?;
    }

    Ok(())
}

/// Timeouts must sit between 1 second and 2 minutes
fn validate_timeout(name: &str, value: u64) -> Result<(), ConfigError> {
    if !(1_000..=120_000).contains(&value) {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1000ms and 120000ms, got {}ms",
            name, value
        )));
    }
    Ok(())
}

/// Validates page and concurrency limits
fn validate_limits_config(config: &LimitsConfig) -> Result<(), ConfigError> {
    if config.discovery_max_pages < 1 || config.discovery_max_pages > 500 {
        return Err(ConfigError::Validation(format!(
            "discovery_max_pages must be between 1 and 500, got {}",
            config.discovery_max_pages
        )));
    }

    if config.compile_max_pages < 1 || config.compile_max_pages > 500 {
        return Err(ConfigError::Validation(format!(
            "compile_max_pages must be between 1 and 500, got {}",
            config.compile_max_pages
        )));
    }

    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_fetches must be between 1 and 100, got {}",
            config.max_concurrent_fetches
        )));
    }

    Ok(())
}
