//! # client
//!
//! Leptos + WASM frontend for the portfolio page.
//!
//! The page is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). View state and content come from the `folio` crate; this
//! crate renders them and executes the effects `folio::update` asks for.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
