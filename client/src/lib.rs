//! # client
//!
//! Leptos + WASM frontend for the gaming lounge site: landing page, digital
//! menu with a chat-handoff cart, and the live station status board.
//!
//! This crate contains pages, components, application state, and the HTTP
//! layer for the external lounge API. It integrates with the `floorgrid`
//! crate for imperative canvas rendering via the `GridHost` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
