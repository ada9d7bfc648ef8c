// web_app/api/mod.rs - Client for the external marketplace REST API
//
// The API itself lives elsewhere; this module only consumes it:
// - client.rs: typed GET calls for products, categories and vendors
// - error.rs: failure classification surfaced to the pages

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
