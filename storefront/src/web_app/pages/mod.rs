// web_app/pages/mod.rs - Page components module
//
// - HomePage: landing page with trending products and featured vendors
// - ProductsPage: filterable product listing
// - VendorsPage: vendor directory
// - list_state: signal wrapper shared by the two list pages

pub mod home;
pub mod list_state;
pub mod products;
pub mod vendors;

// Re-export page components
pub use home::HomePage;
pub use products::ProductsPage;
pub use vendors::VendorsPage;
