//! Route matching for navigation links.
//!
//! A link is "active" when its URL and the current route point at the
//! same page. Trailing-slash variants are the same page: `/about/` and
//! `/about` both normalize to `/about`, and the root keeps its single
//! slash.

/// Normalize a route path for comparison.
/// Strips all trailing slashes; an empty result (including an empty
/// input) maps to `/`.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether a navigation link targets the current route.
/// Exact equality of normalized forms - a link to `/blog` is NOT active
/// on `/blog/post-1`.
pub fn is_active(url: &str, current_path: &str) -> bool {
    normalize_path(url) == normalize_path(current_path)
}
