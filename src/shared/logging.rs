//! Structured logging for the site shell server.
//!
//! Uses tracing with an `operation` field so settings loading can be
//! filtered in the logs.

use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SettingsLoad,
    SettingsParse,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SettingsLoad => "settings_load",
            LogOperation::SettingsParse => "settings_parse",
        }
    }
}

pub fn log_settings_load_start(path: &Path) {
    tracing::debug!(
        operation = LogOperation::SettingsLoad.as_str(),
        path = %path.display(),
        "Loading site settings"
    );
}

pub fn log_settings_missing(path: &Path) {
    tracing::warn!(
        operation = LogOperation::SettingsLoad.as_str(),
        path = %path.display(),
        "Settings file not found - header renders fallback"
    );
}

pub fn log_settings_loaded(path: &Path, menu_items: usize, has_logo: bool, has_cta: bool) {
    tracing::info!(
        operation = LogOperation::SettingsLoad.as_str(),
        path = %path.display(),
        menu_items = menu_items,
        has_logo = has_logo,
        has_cta = has_cta,
        "Site settings loaded"
    );
}

pub fn log_settings_parse_error(path: &Path, error: &str) {
    tracing::error!(
        operation = LogOperation::SettingsParse.as_str(),
        path = %path.display(),
        error = error,
        "Failed to parse settings file"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::SettingsLoad.as_str(), "settings_load");
        assert_eq!(LogOperation::SettingsParse.as_str(), "settings_parse");
    }
}
