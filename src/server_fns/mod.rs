//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::domain::models::SiteSettings;

/// Fetch the site settings (logo, menu, CTA) for the header.
/// `Ok(None)` means no content file exists yet; the header renders its
/// fallback instead of failing.
#[server]
pub async fn get_site_settings() -> Result<Option<SiteSettings>, ServerFnError> {
    use crate::config::CONFIG;
    use crate::infrastructure::content::load_site_settings;

    load_site_settings(&CONFIG.content_file).map_err(|e| ServerFnError::new(e))
}
