use crate::config::FilterConfig;
use crate::entry::SiteEntry;
use crate::url::domain::{extract_domain, is_within_domain};
use url::Url;

/// Prunes extracted entries by domain and by file extension
///
/// An empty filter keeps every entry.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    allowed_domain: Option<String>,
    skip_extensions: Vec<String>,
}

impl EntryFilter {
    /// Builds a filter from the `[filter]` configuration section
    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            allowed_domain: config.allowed_domain.as_ref().map(|d| d.to_lowercase()),
            skip_extensions: config
                .skip_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
        }
    }

    /// Returns true if the filter would keep every entry
    pub fn is_empty(&self) -> bool {
        self.allowed_domain.is_none() && self.skip_extensions.is_empty()
    }

    /// Returns true if `entry` passes both the domain and extension checks
    ///
    /// Entries whose URL cannot be parsed are dropped only when a domain
    /// restriction is active, since there is no host to compare.
    pub fn allows(&self, entry: &SiteEntry) -> bool {
        let parsed = Url::parse(&entry.url).ok();

        if let Some(domain) = &self.allowed_domain {
            let host = parsed.as_ref().and_then(extract_domain);
            match host {
                Some(host) if is_within_domain(&host, domain) => {}
                _ => return false,
            }
        }

        if !self.skip_extensions.is_empty() {
            let path = match &parsed {
                Some(url) => url.path().to_lowercase(),
                None => entry.url.to_lowercase(),
            };
            if self.skip_extensions.iter().any(|ext| path.ends_with(ext)) {
                return false;
            }
        }

        true
    }

    /// Keeps the allowed entries in their original order
    ///
    /// # Returns
    ///
    /// The kept entries and the number of entries dropped
    pub fn apply(&self, entries: Vec<SiteEntry>) -> (Vec<SiteEntry>, usize) {
        if self.is_empty() {
            return (entries, 0);
        }

        let total = entries.len();
        let kept: Vec<SiteEntry> = entries
            .into_iter()
            .filter(|entry| {
                let allowed = self.allows(entry);
                if !allowed {
                    tracing::debug!("Filtered out: {} ({})", entry.title, entry.url);
                }
                allowed
            })
            .collect();
        let dropped = total - kept.len();

        (kept, dropped)
    }
}
