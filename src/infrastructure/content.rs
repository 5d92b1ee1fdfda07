//! Loads site settings from the content file on disk.
//!
//! A missing file is not an error: the header degrades to its fallback
//! rendering. Unreadable or malformed content is reported as an error.

use std::path::Path;

use crate::domain::models::SiteSettings;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{
    log_settings_load_start, log_settings_loaded, log_settings_missing, log_settings_parse_error,
};

/// Read and parse the settings file. `Ok(None)` when the file does not
/// exist.
pub fn load_site_settings(path: &Path) -> Result<Option<SiteSettings>> {
    log_settings_load_start(path);

    if !path.exists() {
        log_settings_missing(path);
        return Ok(None);
    }

    let raw = std::fs::read_to_string(path)?;
    let settings: SiteSettings = serde_json::from_str(&raw).map_err(|e| {
        log_settings_parse_error(path, &e.to_string());
        AppError::from(e)
    })?;

    log_settings_loaded(
        path,
        settings.menu_items.len(),
        settings.logo.is_some(),
        settings.cta_button.is_some(),
    );
    Ok(Some(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("site-shell-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_degrades_to_none() {
        let path = std::env::temp_dir().join("site-shell-definitely-missing.json");
        let loaded = load_site_settings(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_loads_valid_settings() {
        let path = temp_file(
            "valid.json",
            r#"{ "menuItems": [ { "label": "Home", "url": "/" } ] }"#,
        );
        let loaded = load_site_settings(&path).unwrap().unwrap();
        assert_eq!(loaded.menu_items.len(), 1);
        assert_eq!(loaded.menu_items[0].label, "Home");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let path = temp_file("invalid.json", "{ not json");
        let result = load_site_settings(&path);
        assert!(matches!(result, Err(AppError::SerializationError(_))));
        std::fs::remove_file(&path).ok();
    }
}
