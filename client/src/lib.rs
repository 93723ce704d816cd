//! # client
//!
//! Leptos front end for the Product Builder demo page: the settings form,
//! the simulated generation views, and the browser glue (timers, clipboard,
//! pointer glow) around the `timeline` crate.
//!
//! Built twice: with `ssr` for the server's renderer and with `hydrate` for
//! the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
