//! Sumi-Scroll main entry point
//!
//! This is the command-line interface for the Sumi-Scroll documentation compiler.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sumi_scroll::api;
use sumi_scroll::config::{load_config_with_hash, Config};
use sumi_scroll::crawler::Coordinator;
use tracing_subscriber::EnvFilter;

/// Sumi-Scroll: A documentation site compiler
///
/// Sumi-Scroll discovers the pages of a documentation website, groups them
/// by category, and compiles them into a single markdown document.
#[derive(Parser, Debug)]
#[command(name = "sumi-scroll")]
#[command(version)]
#[command(about = "A documentation site compiler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the structure of a documentation site as JSON
    Discover {
        /// Seed URL of the documentation site
        url: String,
    },

    /// Compile a documentation site into one markdown document
    Compile {
        /// Seed URL of the documentation site
        url: String,

        /// Compile these pages instead of the sitemap (repeatable)
        #[arg(long = "page", value_name = "URL")]
        pages: Vec<String>,

        /// Print the full JSON response instead of the document
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let coordinator = Coordinator::new(config)?;

    match cli.command {
        Command::Discover { url } => handle_discover(&coordinator, &url).await,
        Command::Compile { url, pages, json } => {
            handle_compile(&coordinator, &url, &pages, json).await
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the response.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_scroll=info,warn"),
            1 => EnvFilter::new("sumi_scroll=debug,info"),
            2 => EnvFilter::new("sumi_scroll=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the discover subcommand: prints the JSON envelope
async fn handle_discover(coordinator: &Coordinator, url: &str) -> anyhow::Result<()> {
    let response = api::discover(coordinator, Some(url)).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(error) = response.error {
        bail!(error);
    }
    Ok(())
}

/// Handles the compile subcommand: prints the document or the JSON envelope
async fn handle_compile(
    coordinator: &Coordinator,
    url: &str,
    pages: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let response = api::compile(coordinator, Some(url), Some(pages)).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if let Some(content) = &response.content {
        println!("{}", content);
    }

    if let Some(error) = response.error {
        bail!(error);
    }

    if let Some(metadata) = &response.metadata {
        tracing::info!(
            "Compiled {} pages from {} at {}",
            metadata.total_pages,
            metadata.source_url,
            metadata.compiled_at
        );
    }
    Ok(())
}
