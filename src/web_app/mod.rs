// web_app/mod.rs - Root module for the catalog web client
//
// Architecture:
// - model/: Wire types returned by the product API
// - config.rs: Client and dev host configuration
// - error.rs: Error taxonomy for API calls
// - api/: HTTP client for the product API (native and WASM)
// - controller/: Filter/pagination state machine and page view model
// - render.rs: Pure product card rendering
// - components/: Leptos UI components (csr only)
// - pages/: Page-level components (csr only)
// - app.rs: Root application component with routing (csr only)

pub mod model;
pub mod config;
pub mod error;
pub mod api;
pub mod controller;
pub mod render;

#[cfg(feature = "csr")]
pub mod components;

#[cfg(feature = "csr")]
pub mod pages;

#[cfg(feature = "csr")]
pub mod app;

#[cfg(feature = "csr")]
pub use app::App;
