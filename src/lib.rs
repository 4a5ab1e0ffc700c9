// lib.rs - Root module for the vegan_catalog library
//
// The catalog client is split into a pure core (model, api, controller,
// render) that compiles and tests natively, and Leptos views that only
// build for the browser (`csr` feature).

pub mod logging;
pub mod web_app;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: installs the panic hook and logger, then mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init_browser_logging();

    tracing::info!("Mounting vegan catalog client");
    leptos::mount::mount_to_body(web_app::App);
}
