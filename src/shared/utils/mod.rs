// Utility functions
// Route matching, helpers

pub mod nav;

pub use nav::{is_active, normalize_path};
