//! Sitemap-Scrape main entry point
//!
//! This is the command-line interface for the sitemap harvester.

use anyhow::Context;
use clap::Parser;
use sitemap_scrape::config::{self, Config, DOCUMENT_EXTENSIONS};
use sitemap_scrape::crawler::crawl;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Sitemap-Scrape: harvest an agency sitemap into CSV
///
/// Fetches the sitemap page, extracts every link in its navigation tree
/// together with its title, and writes the (title, url) rows to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "sitemap-scrape")]
#[command(version)]
#[command(about = "Harvest an agency sitemap into CSV", long_about = None)]
struct Cli {
    /// URL of the sitemap page
    #[arg(long, value_name = "SITEMAP_URL")]
    url: Option<String>,

    /// File to save all the sites (`-` for stdout)
    #[arg(short, long, value_name = "FILE_PATH")]
    output: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Keep only links on this domain and its subdomains
    #[arg(long, value_name = "DOMAIN")]
    domain: Option<String>,

    /// Drop links to files with this extension (repeatable, e.g. .pdf)
    #[arg(long = "skip-ext", value_name = "EXT")]
    skip_ext: Vec<String>,

    /// Drop links to office documents and PDFs
    #[arg(long)]
    skip_documents: bool,

    /// Do not write the title,url header row
    #[arg(long)]
    no_header: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// File to store a debug-level log
    #[arg(short, long, value_name = "LOGFILE")]
    logfile: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet, cli.logfile.as_deref())?;

    let config = build_config(&cli)?;

    match crawl(&config).await {
        Ok(report) => {
            tracing::info!(
                "Wrote {} of {} entries to {}",
                report.written,
                report.extracted,
                report.output_path.display()
            );
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Crawl failed")),
    }
}

/// Loads the configuration file, if any, and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            config::load_config(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    apply_overrides(cli, &mut config);
    config::validate(&config).context("invalid configuration")?;

    Ok(config)
}

/// Command-line flags take precedence over the configuration file
fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(url) = &cli.url {
        config.crawl.source_url = url.clone();
    }

    if let Some(output) = &cli.output {
        config.crawl.output_path = output.clone();
    }

    if let Some(domain) = &cli.domain {
        config.filter.allowed_domain = Some(domain.clone());
    }

    let mut extra = cli.skip_ext.clone();
    if cli.skip_documents {
        extra.extend(DOCUMENT_EXTENSIONS.iter().map(|ext| ext.to_string()));
    }
    for ext in extra {
        if !config.filter.skip_extensions.contains(&ext) {
            config.filter.skip_extensions.push(ext);
        }
    }

    if cli.no_header {
        config.output.header = false;
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// With a log file, a second plain-text layer records debug output there
/// regardless of the console verbosity.
fn setup_logging(verbose: u8, quiet: bool, logfile: Option<&Path>) -> anyhow::Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_scrape=info,warn"),
            1 => EnvFilter::new("sitemap_scrape=debug,info"),
            2 => EnvFilter::new("sitemap_scrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Stdout is reserved for `-o -` CSV output
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_filter(filter);

    let file_layer = match logfile {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(EnvFilter::new("sitemap_scrape=debug,info")),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    Ok(())
}
