// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Small stateless pieces (Loading, ErrorDisplay, banners, load-more)
// - filters.rs: Sidebar filter panels (categories, vegan status)
// - product.rs: Product cards and the results grid

pub mod common;
pub mod filters;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use filters::*;
pub use product::*;
