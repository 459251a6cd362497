use crate::config::types::{Config, CrawlConfig, FilterConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_filter_config(&config.filter)?;
    Ok(())
}

/// Validates the sitemap URL and output path
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.source_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid source_url '{}': {}", config.source_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "source_url must use HTTP or HTTPS, got '{}'",
            config.source_url
        )));
    }

    if config.output_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the entry filter settings
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    if let Some(domain) = &config.allowed_domain {
        if domain.is_empty() || domain.contains('/') || domain.contains(':') {
            return Err(ConfigError::Validation(format!(
                "allowed_domain must be a bare host name, got '{}'",
                domain
            )));
        }
    }

    for ext in &config.skip_extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "skip extension must look like '.pdf', got '{}'",
                ext
            )));
        }
    }

    Ok(())
}
