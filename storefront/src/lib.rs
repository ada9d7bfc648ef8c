// lib.rs - Root module for the storefront library
//
// The same crate builds the actix shell server (`ssr`) and the WASM
// bundle that hydrates it in the browser (`hydrate`).

pub mod web_app;

/// WASM entry point, called by the script cargo-leptos injects.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::app::App;
    use crate::web_app::config::AppConfig;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    leptos::mount::hydrate_body(move || view! { <App config=config /> });
}
