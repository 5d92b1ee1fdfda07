use serde::{Deserialize, Serialize};

/// One entry of the navigation menu. Order in `SiteSettings::menu_items`
/// is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: String,
    pub url: String,
    /// External links open in a new tab with noopener/noreferrer.
    #[serde(default)]
    pub is_external: bool,
}

/// Call-to-action button in the header. Optional: an absent CTA means
/// nothing is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub is_external: bool,
}

/// Logo image reference. When absent the header falls back to a text
/// placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoRef {
    pub url: String,
    pub alt_text: Option<String>,
}

/// Site-wide header settings, as delivered by the content file.
/// Field names match the original camelCase payload. Every field is
/// optional so partial content degrades instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub logo: Option<LogoRef>,
    #[serde(default)]
    pub menu_items: Vec<NavLink>,
    pub cta_button: Option<CallToAction>,
}
