//! HTTP fetcher implementation
//!
//! This module handles the single request the crawler makes:
//! - Building an HTTP client with a proper user agent string
//! - GET request for the sitemap page
//! - Error classification (transport failure vs. non-success status)
//!
//! There is no retry logic. Timeouts are reqwest's defaults.

use crate::config::UserAgentConfig;
use crate::FetchError;
use reqwest::Client;

/// A successfully retrieved page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,

    /// Page body, decoded using the response charset
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use sitemap_scrape::config::UserAgentConfig;
/// use sitemap_scrape::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "SitemapScrape".to_string(),
///     crawler_version: "1.0".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, FetchError> {
    // Format: CrawlerName/Version
    let user_agent = format!("{}/{}", config.crawler_name, config.crawler_version);

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(FetchError::Client)
}

/// Fetches a URL and returns its body
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | Connection refused, DNS, TLS, body read | `FetchError::Request` |
/// | Any non-2xx status after redirects | `FetchError::Status` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return Err(FetchError::Status {
            url: final_url,
            status: status.as_u16(),
        });
    }

    if final_url != url {
        tracing::debug!("Redirected to {}", final_url);
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchError::Request {
            url: final_url.clone(),
            source,
        })?;

    tracing::debug!("Received {} bytes from {}", body.len(), final_url);

    Ok(FetchedPage {
        final_url,
        body,
    })
}
