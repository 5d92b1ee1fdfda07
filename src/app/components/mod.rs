pub mod corner;
pub mod cta_link;

pub use corner::{compute_corner, Corner, CornerSpec, CornerStyle, CssLength, RotatePosition};
pub use cta_link::CtaLink;
