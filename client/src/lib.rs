//! # client
//!
//! Leptos + WASM frontend for the wallet sign-in flow.
//!
//! This crate contains the sign-in and balance pages, leaf components, auth
//! state, and the ports (HTTP transport, durable storage, navigation) that the
//! submission flow runs against.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
