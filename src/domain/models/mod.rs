// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod site;

pub use site::{CallToAction, LogoRef, NavLink, SiteSettings};
