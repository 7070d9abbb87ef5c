//! # client
//!
//! Leptos + WASM frontend for the community chat and member matching app.
//!
//! This crate contains pages, components, application state, and the network
//! layer that talks to the two server gateways: the streaming chat endpoint
//! and the member match endpoint. It compiles natively for unit tests and to
//! WASM (feature `csr`) for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
