// web_app/pages/mod.rs - Page components module
//
// - CatalogPage: product listing with category and vegan status filters

pub mod catalog;

// Re-export page components
pub use catalog::CatalogPage;
