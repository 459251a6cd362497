use serde::Deserialize;

/// Sitemap of the Coast Guard Administration site
pub const DEFAULT_SOURCE_URL: &str = "https://www.cga.gov.tw/GipOpen/wSite/sitemap?mp=9997";

/// Output file used when none is configured
pub const DEFAULT_OUTPUT_PATH: &str = "site.csv";

/// Extensions of downloadable documents linked from agency sitemaps
pub const DOCUMENT_EXTENSIONS: &[&str] =
    &[".pdf", ".doc", ".docx", ".odt", ".xls", ".xlsx", ".ods"];

/// Main configuration structure for Sitemap-Scrape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Where to read the sitemap from and where to write the CSV
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// URL of the sitemap page
    #[serde(rename = "source-url", default = "default_source_url")]
    pub source_url: String,

    /// CSV destination; `-` means stdout
    #[serde(rename = "output-path", default = "default_output_path")]
    pub output_path: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            output_path: default_output_path(),
        }
    }
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
        }
    }
}

fn default_crawler_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// CSV output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Write a `title,url` header row before the entries
    #[serde(default = "default_header")]
    pub header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
        }
    }
}

fn default_header() -> bool {
    true
}

/// Optional pruning of extracted entries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    /// Keep only links on this domain or its subdomains
    #[serde(rename = "allowed-domain", default)]
    pub allowed_domain: Option<String>,

    /// Drop links whose path ends with one of these extensions
    #[serde(rename = "skip-extensions", default)]
    pub skip_extensions: Vec<String>,
}
