// web_app/mod.rs - Root module for the Leptos storefront
//
// Architecture:
// - model/: Product/Vendor records and display fallbacks (shared)
// - config.rs: API base URL, resolved once at startup (shared)
// - api/: HTTP client for the external marketplace API (shared)
// - listing.rs: filter/pagination state machine for list pages (shared)
// - nav.rs: routes and active-link rules (shared)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod api;
pub mod config;
pub mod listing;
pub mod model;
pub mod nav;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
