// web_app/app.rs - Root application component
//
// Sets up meta tags, the shared API client, the header and routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::api::ApiClient;
use crate::web_app::components::Navbar;
use crate::web_app::config::{AppConfig, API_URL_META};
use crate::web_app::nav::HOME_PATH;
use crate::web_app::pages::{HomePage, ProductsPage, VendorsPage};

pub const APP_TITLE: &str = "MultiVendor Marketplace";

/// Root application component
///
/// `config` is resolved once at startup. It is echoed into a `<meta>` tag
/// so the hydrated client picks up the same API base URL as the server.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new(&config));

    let api_base_url = config.api_base_url().to_string();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Discover products from verified vendors worldwide" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Meta name=API_URL_META content=api_base_url />

        <Stylesheet id="leptos" href="/pkg/storefront.css" />

        <Router>
            <div class="min-h-screen bg-slate-50 text-slate-900">
                <Navbar />
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/vendors") view=VendorsPage />
                </Routes>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-300 mb-4">"404"</h1>
                <p class="text-xl text-slate-600 mb-8">"Page not found"</p>
                <a
                    href=HOME_PATH
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to the marketplace"
                </a>
            </div>
        </div>
    }
}
