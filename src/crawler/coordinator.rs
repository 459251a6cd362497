//! Crawler coordinator - the fetch, parse, filter, write pipeline
//!
//! The run is strictly sequential. The output file is not touched until the
//! page has been fetched and parsed, so a failed fetch leaves any previous
//! CSV in place.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::parser::parse_sitemap;
use crate::output::write_entries;
use crate::url::EntryFilter;
use crate::{FetchError, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    /// Entries found in the navigation tree
    pub extracted: usize,

    /// Entries dropped by the domain or extension filter
    pub filtered_out: usize,

    /// Rows written to the output
    pub written: usize,

    /// Where the rows were written
    pub output_path: PathBuf,
}

/// Runs the whole pipeline for one configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Entries were written
/// * `Err(CrawlError)` - The fetch or the write failed
pub async fn run_crawl(config: &Config) -> Result<CrawlReport> {
    let source_url = &config.crawl.source_url;

    tracing::info!("Loading sitemap from {}", source_url);
    let client = build_http_client(&config.user_agent)?;
    let page = fetch_page(&client, source_url).await?;

    let base_url = Url::parse(&page.final_url).map_err(|source| FetchError::InvalidUrl {
        url: page.final_url.clone(),
        source,
    })?;

    let entries = parse_sitemap(&page.body, &base_url);
    let extracted = entries.len();
    tracing::info!("Found {} entries in sitemap", extracted);

    let filter = EntryFilter::from_config(&config.filter);
    let (entries, filtered_out) = filter.apply(entries);
    if filtered_out > 0 {
        tracing::info!("Filtered out {} entries", filtered_out);
    }

    for (idx, entry) in entries.iter().enumerate() {
        tracing::debug!("[{}] {}\t{}", idx, entry.title, entry.url);
    }

    let output_path = Path::new(&config.crawl.output_path);
    let written = write_entries(&entries, output_path, config.output.header)?;
    tracing::info!("Data saved to {}", output_path.display());

    Ok(CrawlReport {
        extracted,
        filtered_out,
        written,
        output_path: output_path.to_path_buf(),
    })
}
