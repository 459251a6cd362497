//! Sitemap-Scrape: an agency sitemap harvester
//!
//! This crate fetches a site-navigation page, extracts the titles and links
//! listed in its navigation tree, and writes them to a CSV file.

pub mod config;
pub mod crawler;
pub mod entry;
pub mod output;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Sitemap-Scrape operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
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

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while retrieving the sitemap page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid sitemap URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },
}

/// Errors raised while writing the CSV output
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: csv::Error },

    #[error("Failed to write CSV record to {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Failed to flush {}: {source}", path.display())]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for Sitemap-Scrape operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, CrawlConfig};
pub use crawler::{crawl, CrawlReport};
pub use entry::SiteEntry;
