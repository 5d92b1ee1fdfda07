pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the site shell App
pub use pages::routes::App;
