//! Crawler module for documentation discovery and compilation
//!
//! This module contains the request pipeline, including:
//! - HTTP fetching with per-call timeouts
//! - Sitemap and navigation discovery
//! - Concurrent fetch+extract batches
//! - Discover and compile orchestration

mod coordinator;
mod discovery;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{compile, discover, Coordinator};
pub use discovery::{
    discover_candidates, discover_navigation_urls, discover_sitemap_urls, parse_sitemap_locs,
    Strategies, SITEMAP_PATHS,
};
pub use fetcher::{build_http_client, fetch_page, RawPage};
pub use parser::{extract_navigation_links, NavLink};
pub use scheduler::{BatchOutcome, PageFailure, Scheduler};
