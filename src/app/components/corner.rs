//! Decorative clipped-corner accent.
//!
//! A small square with one corner cut away by a quadratic curve, rotated
//! into place. The base shape is always drawn in local coordinates as if
//! the rotation were `LeftTop`, then rotated as a rigid transform - the
//! curve endpoints are axis-aligned to the unrotated box, so reversing
//! that order would change the silhouette.

use dioxus::prelude::*;
use std::fmt;

/// Default edge length in pixels.
pub const DEFAULT_CORNER_SIZE: u32 = 24;

/// Default fill, themeable via the stylesheet.
pub const DEFAULT_CORNER_COLOR: &str = "var(--corner)";

/// Which corner of the parent box the accent points into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotatePosition {
    #[default]
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

impl RotatePosition {
    /// Rigid rotation applied after the clip path is computed.
    pub fn transform(self) -> &'static str {
        match self {
            RotatePosition::LeftTop => "rotate(0deg)",
            RotatePosition::RightTop => "rotate(90deg)",
            RotatePosition::LeftBottom => "rotate(180deg)",
            RotatePosition::RightBottom => "rotate(270deg)",
        }
    }
}

/// A CSS offset: a pixel count or a raw CSS length expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssLength {
    Px(i32),
    Raw(String),
}

impl Default for CssLength {
    fn default() -> Self {
        CssLength::Px(0)
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssLength::Px(n) => write!(f, "{n}px"),
            CssLength::Raw(s) => f.write_str(s),
        }
    }
}

impl From<i32> for CssLength {
    fn from(px: i32) -> Self {
        CssLength::Px(px)
    }
}

impl From<&str> for CssLength {
    fn from(raw: &str) -> Self {
        CssLength::Raw(raw.to_string())
    }
}

impl From<String> for CssLength {
    fn from(raw: String) -> Self {
        CssLength::Raw(raw)
    }
}

/// Caller-supplied parameters for one corner accent.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerSpec {
    pub size: u32,
    pub rotate_position: RotatePosition,
    pub color: String,
    pub top: CssLength,
    pub left: CssLength,
    /// Advisory: viewport width below which the stylesheet hides the
    /// accent. Not enforced here.
    pub hide_below_width: Option<u32>,
}

impl Default for CornerSpec {
    fn default() -> Self {
        CornerSpec {
            size: DEFAULT_CORNER_SIZE,
            rotate_position: RotatePosition::default(),
            color: DEFAULT_CORNER_COLOR.to_string(),
            top: CssLength::default(),
            left: CssLength::default(),
            hide_below_width: None,
        }
    }
}

/// Computed presentation of a corner accent.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerStyle {
    pub width: u32,
    pub height: u32,
    pub transform: &'static str,
    pub clip_path: String,
    pub top: CssLength,
    pub left: CssLength,
    pub background_color: String,
    pub hide_below_width: Option<u32>,
}

/// Derive the box, clip path and transform for one corner accent.
/// Pure: no I/O, total over its domain.
pub fn compute_corner(spec: &CornerSpec) -> CornerStyle {
    let size = spec.size;
    CornerStyle {
        width: size,
        height: size,
        transform: spec.rotate_position.transform(),
        // Square with the top-right-to-bottom-left edge pulled through
        // the local origin. The control point stays at 0 0 for every
        // size, which is what produces the concave cut.
        clip_path: format!("path(\"M 0 0 L {size} 0 Q 0 0 0 {size} Z\")"),
        top: spec.top.clone(),
        left: spec.left.clone(),
        background_color: spec.color.clone(),
        hide_below_width: spec.hide_below_width,
    }
}

impl CornerStyle {
    /// Inline style string for the accent element.
    pub fn css(&self) -> String {
        format!(
            "display: flex; position: absolute; width: {}px; height: {}px; \
             top: {}; left: {}; background-color: {}; transform: {}; clip-path: {};",
            self.width, self.height, self.top, self.left, self.background_color,
            self.transform, self.clip_path,
        )
    }
}

#[component]
pub fn Corner(
    #[props(into, default)] top: CssLength,
    #[props(into, default)] left: CssLength,
    #[props(default)] rotate_position: RotatePosition,
    #[props(into)] color: Option<String>,
    #[props(default = DEFAULT_CORNER_SIZE)] size: u32,
    hide_below_width: Option<u32>,
) -> Element {
    let spec = CornerSpec {
        size,
        rotate_position,
        color: color.unwrap_or_else(|| DEFAULT_CORNER_COLOR.to_string()),
        top,
        left,
        hide_below_width,
    };
    let style = compute_corner(&spec);
    let inline = style.css();

    rsx! {
        div {
            class: "c-corner",
            style: "{inline}",
            "data-hide-below": style.hide_below_width.map(|w| w.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_transforms() {
        assert_eq!(RotatePosition::LeftTop.transform(), "rotate(0deg)");
        assert_eq!(RotatePosition::RightTop.transform(), "rotate(90deg)");
        assert_eq!(RotatePosition::LeftBottom.transform(), "rotate(180deg)");
        assert_eq!(RotatePosition::RightBottom.transform(), "rotate(270deg)");
    }

    #[test]
    fn test_compute_corner_square_box() {
        let style = compute_corner(&CornerSpec {
            size: 12,
            rotate_position: RotatePosition::RightTop,
            ..CornerSpec::default()
        });
        assert_eq!(style.width, 12);
        assert_eq!(style.height, 12);
        assert_eq!(style.transform, "rotate(90deg)");
        assert_eq!(style.clip_path, "path(\"M 0 0 L 12 0 Q 0 0 0 12 Z\")");
    }

    #[test]
    fn test_clip_path_scales_linearly_with_size() {
        let small = compute_corner(&CornerSpec { size: 12, ..CornerSpec::default() });
        let large = compute_corner(&CornerSpec { size: 24, ..CornerSpec::default() });
        assert_eq!(small.clip_path, "path(\"M 0 0 L 12 0 Q 0 0 0 12 Z\")");
        assert_eq!(large.clip_path, "path(\"M 0 0 L 24 0 Q 0 0 0 24 Z\")");
    }

    #[test]
    fn test_defaults() {
        let style = compute_corner(&CornerSpec::default());
        assert_eq!(style.width, DEFAULT_CORNER_SIZE);
        assert_eq!(style.transform, "rotate(0deg)");
        assert_eq!(style.background_color, DEFAULT_CORNER_COLOR);
        assert_eq!(style.hide_below_width, None);
    }

    #[test]
    fn test_hide_below_is_advisory_passthrough() {
        let style = compute_corner(&CornerSpec {
            hide_below_width: Some(1050),
            ..CornerSpec::default()
        });
        assert_eq!(style.hide_below_width, Some(1050));
        // Not part of the inline style - the stylesheet decides
        assert!(!style.css().contains("1050"));
    }

    #[test]
    fn test_css_lengths_render() {
        let style = compute_corner(&CornerSpec {
            top: CssLength::Px(20),
            left: CssLength::Raw("calc(100% - 12px)".to_string()),
            ..CornerSpec::default()
        });
        let css = style.css();
        assert!(css.contains("top: 20px;"));
        assert!(css.contains("left: calc(100% - 12px);"));
    }
}
