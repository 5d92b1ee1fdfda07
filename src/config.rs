//! Runtime configuration, resolved from the environment.

use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Default location of the site settings file, relative to the server
/// working directory.
pub const DEFAULT_CONTENT_FILE: &str = "content/site.json";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// JSON file holding logo, menu and CTA settings.
    pub content_file: PathBuf,
}

impl SiteConfig {
    /// Read configuration from the environment. `SITE_CONTENT_FILE`
    /// overrides the default content location.
    pub fn from_env() -> Self {
        let content_file = std::env::var("SITE_CONTENT_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONTENT_FILE));
        SiteConfig { content_file }
    }
}

/// Process-wide config, resolved once at first use.
pub static CONFIG: Lazy<SiteConfig> = Lazy::new(SiteConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_file() {
        // Env mutation in tests races with other tests reading the same
        // variable, so only the default path is exercised here.
        if std::env::var("SITE_CONTENT_FILE").is_err() {
            let config = SiteConfig::from_env();
            assert_eq!(config.content_file, PathBuf::from(DEFAULT_CONTENT_FILE));
        }
    }
}
