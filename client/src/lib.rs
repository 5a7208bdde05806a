//! # chat-widget
//!
//! Leptos + WASM floating chat widget. A toggle button opens a panel that
//! posts the user's question to a remote answering endpoint and renders the
//! markdown answer with its source citations.
//!
//! Built with `hydrate` for the browser bundle and with `ssr` when linked
//! into the host server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
