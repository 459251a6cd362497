//! HTML parser for extracting sitemap entries
//!
//! The agency sitemap renders its navigation as a nested list:
//!
//! ```html
//! <div class="sitemap">
//!   <ul class="mapTree">
//!     <li><a href="...">1.About</a>
//!       <ul><li><a href="...">1.1 History</a></li></ul>
//!     </li>
//!   </ul>
//! </div>
//! ```
//!
//! Every link inside the first `ul.mapTree` becomes one [`SiteEntry`], in
//! document order. A page without that structure yields no entries.

use crate::entry::SiteEntry;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Selector for the navigation tree on the sitemap page
const NAVIGATION_TREE: &str = "div.sitemap ul.mapTree";

/// Parses sitemap HTML and extracts its entries
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The base URL for resolving relative links
///
/// # Returns
///
/// The entries in document order; empty when the navigation tree is absent
///
/// # Example
///
/// ```
/// use sitemap_scrape::crawler::parse_sitemap;
/// use url::Url;
///
/// let html = r#"<div class="sitemap"><ul class="mapTree">
///     <li><a href="/news">1.News</a></li>
/// </ul></div>"#;
/// let base_url = Url::parse("https://example.gov/sitemap").unwrap();
/// let entries = parse_sitemap(html, &base_url);
/// assert_eq!(entries[0].title, "News");
/// assert_eq!(entries[0].url, "https://example.gov/news");
/// ```
pub fn parse_sitemap(html: &str, base_url: &Url) -> Vec<SiteEntry> {
    let document = Html::parse_document(html);

    let Some(tree) = find_navigation_tree(&document) else {
        tracing::warn!("No navigation tree ({}) found on the page", NAVIGATION_TREE);
        return Vec::new();
    };

    extract_entries(tree, base_url)
}

/// Finds the first navigation tree in the document
fn find_navigation_tree(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse(NAVIGATION_TREE).ok()?;
    document.select(&selector).next()
}

/// Extracts one entry per link in the tree
fn extract_entries(tree: ElementRef<'_>, base_url: &Url) -> Vec<SiteEntry> {
    let mut entries = Vec::new();

    let Ok(a_selector) = Selector::parse("a") else {
        return entries;
    };

    for element in tree.select(&a_selector) {
        let raw_text = element.text().collect::<String>();

        let Some(href) = element.value().attr("href") else {
            tracing::warn!("Skipping link without href: {:?}", raw_text.trim());
            continue;
        };

        let Some(url) = resolve_link(href, base_url) else {
            tracing::warn!("Skipping unresolvable link {:?}: {:?}", raw_text.trim(), href);
            continue;
        };

        let title = clean_title(&raw_text);
        if title.is_empty() {
            tracing::warn!("Link without text: {}", url);
        }

        entries.push(SiteEntry { title, url });
    }

    tracing::debug!("Extracted {} entries from navigation tree", entries.len());
    entries
}

/// Resolves a link href to an absolute URL
///
/// Returns None if the link should be excluded:
/// - empty hrefs
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - hrefs the base URL cannot join
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    base_url.join(href).ok().map(|url| url.to_string())
}

/// Normalizes link text into an entry title
///
/// Collapses runs of whitespace and strips the outline number the sitemap
/// prepends to each item (`1.`, `2.3 `).
///
/// # Examples
///
/// ```
/// use sitemap_scrape::crawler::clean_title;
///
/// assert_eq!(clean_title("  2.3   Press  Releases "), "Press Releases");
/// assert_eq!(clean_title("1.最新消息"), "最新消息");
/// assert_eq!(clean_title("Contact"), "Contact");
/// ```
pub fn clean_title(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    strip_outline_number(&collapsed).to_string()
}

/// Removes a leading `digits-and-dots` prefix
///
/// The prefix only counts when it contains a dot or is followed by a
/// space, and when something remains after it.
fn strip_outline_number(text: &str) -> &str {
    let rest = text.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.');
    let prefix = &text[..text.len() - rest.len()];

    if prefix.is_empty() || !prefix.chars().any(|c| c.is_ascii_digit()) {
        return text;
    }

    if !prefix.contains('.') && !rest.starts_with(' ') {
        return text;
    }

    let rest = rest.trim_start();
    if rest.is_empty() {
        text
    } else {
        rest
    }
}
