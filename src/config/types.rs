use serde::Deserialize;

/// Main configuration structure for Sumi-Scroll
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FetcherConfig {
    /// Name sent in the User-Agent header
    #[serde(default = "default_client_name")]
    pub client_name: String,

    /// Version sent in the User-Agent header
    #[serde(default = "default_client_version")]
    pub client_version: String,

    /// URL with information about the client
    #[serde(default = "default_contact_url")]
    pub contact_url: String,

    /// Timeout for each sitemap probe (milliseconds)
    #[serde(default = "default_sitemap_timeout")]
    pub sitemap_timeout: u64,

    /// Timeout for the navigation scan of the base page (milliseconds)
    #[serde(default = "default_navigation_timeout")]
    pub navigation_timeout: u64,

    /// Timeout for the seed page fetch (milliseconds)
    #[serde(default = "default_main_page_timeout")]
    pub main_page_timeout: u64,

    /// Timeout for each candidate page fetch (milliseconds)
    #[serde(default = "default_page_timeout")]
    pub page_timeout: u64,
}

/// Page count and concurrency limits
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LimitsConfig {
    /// Maximum pages fetched by a discovery request (seed included)
    #[serde(default = "default_discovery_max_pages")]
    pub discovery_max_pages: usize,

    /// Maximum pages fetched by a compile request (seed included)
    #[serde(default = "default_compile_max_pages")]
    pub compile_max_pages: usize,

    /// Maximum number of page fetches in flight at once
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
}

impl FetcherConfig {
    /// Formats the identifying User-Agent string
    ///
    /// Format: `ClientName/Version (+ContactURL)`
    pub fn user_agent(&self) -> String {
        format!(
            "{}/{} (+{})",
            self.client_name, self.client_version, self.contact_url
        )
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            client_name: default_client_name(),
            client_version: default_client_version(),
            contact_url: default_contact_url(),
            sitemap_timeout: default_sitemap_timeout(),
            navigation_timeout: default_navigation_timeout(),
            main_page_timeout: default_main_page_timeout(),
            page_timeout: default_page_timeout(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            discovery_max_pages: default_discovery_max_pages(),
            compile_max_pages: default_compile_max_pages(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
        }
    }
}

fn default_client_name() -> String {
    "SumiScroll".to_string()
}

fn default_client_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://github.com/sumi-scroll/sumi-scroll".to_string()
}

fn default_sitemap_timeout() -> u64 {
    10_000
}

fn default_navigation_timeout() -> u64 {
    10_000
}

fn default_main_page_timeout() -> u64 {
    15_000
}

fn default_page_timeout() -> u64 {
    10_000
}

fn default_discovery_max_pages() -> usize {
    50
}

fn default_compile_max_pages() -> usize {
    15
}

fn default_max_concurrent_fetches() -> usize {
    50
}
