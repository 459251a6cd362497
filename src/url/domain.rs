use url::Url;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemap_scrape::url::extract_domain;
///
/// let url = Url::parse("https://WWW.CGA.GOV.TW/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("www.cga.gov.tw".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Checks whether `host` is `domain` itself or one of its subdomains
///
/// Both sides are compared case-insensitively. A host that merely ends with
/// the same characters (`notcga.gov.tw` for `cga.gov.tw`) does not match.
///
/// # Examples
///
/// ```
/// use sitemap_scrape::url::is_within_domain;
///
/// assert!(is_within_domain("cga.gov.tw", "cga.gov.tw"));
/// assert!(is_within_domain("www.cga.gov.tw", "cga.gov.tw"));
/// assert!(!is_within_domain("notcga.gov.tw", "cga.gov.tw"));
/// ```
pub fn is_within_domain(host: &str, domain: &str) -> bool {
    let host = host.to_lowercase();
    let domain = domain.trim_start_matches('.').to_lowercase();

    host == domain || host.ends_with(&format!(".{}", domain))
}
