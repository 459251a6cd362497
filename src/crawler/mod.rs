//! Crawler module for fetching and reading the sitemap page
//!
//! This module contains the pipeline stages:
//! - HTTP fetching of the sitemap page
//! - HTML parsing and entry extraction
//! - Coordination of fetch, parse, filter and write

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, CrawlReport};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use parser::{clean_title, parse_sitemap};

use crate::config::Config;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client
/// 2. Fetch the sitemap page
/// 3. Extract the navigation entries
/// 4. Apply the optional filters
/// 5. Write the CSV output
///
/// # Arguments
///
/// * `config` - The validated configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed successfully
/// * `Err(CrawlError)` - Crawl failed
pub async fn crawl(config: &Config) -> Result<CrawlReport, CrawlError> {
    run_crawl(config).await
}
