//! URL handling module for Sitemap-Scrape
//!
//! This module provides domain extraction and matching, and the optional
//! filter that drops external links and document downloads from the
//! extracted entries.

mod domain;
mod filter;

// Re-export main functions
pub use domain::{extract_domain, is_within_domain};
pub use filter::EntryFilter;
