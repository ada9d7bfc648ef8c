// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, ErrorDisplay, Pagination, etc.)
// - filters.rs: Product filter sidebar widgets
// - navbar.rs: Header with route links
// - product.rs: Product card and grid
// - vendor.rs: Vendor card and grid

pub mod common;
pub mod filters;
pub mod navbar;
pub mod product;
pub mod vendor;

// Re-export commonly used components for convenience
pub use common::*;
pub use filters::*;
pub use navbar::*;
pub use product::*;
pub use vendor::*;
