// web_app/api/mod.rs - Client for the remote product API
//
// - query.rs: Filter/page snapshot sent with every listing request
// - client.rs: reqwest-based client for the categories and listing endpoints

pub mod client;
pub mod query;

pub use client::ProductApi;
pub use query::ProductQuery;
