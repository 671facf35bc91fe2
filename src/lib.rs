//! Wawee - authentication and landing UI
//!
//! Login, signup and dashboard views for the Wawee web app, built with
//! Leptos and WebAssembly. All network activity is simulated.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
