//! The record type extracted from a sitemap page

use serde::{Deserialize, Serialize};

/// One (title, url) pair listed on the sitemap page
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    /// Link text with the outline number stripped
    pub title: String,

    /// Absolute URL of the linked page
    pub url: String,
}

impl SiteEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
