// Custom Dioxus hooks

pub mod use_mobile_menu;

pub use use_mobile_menu::{use_mobile_menu, MenuState, ScrollLock};
