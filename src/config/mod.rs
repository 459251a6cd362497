//! Configuration module for Sitemap-Scrape
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a default, and command-line flags
//! are applied on top of whatever the file provides.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_scrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemap.toml")).unwrap();
//! println!("Writing entries to: {}", config.crawl.output_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, FilterConfig, OutputConfig, UserAgentConfig, DEFAULT_OUTPUT_PATH,
    DEFAULT_SOURCE_URL, DOCUMENT_EXTENSIONS,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
