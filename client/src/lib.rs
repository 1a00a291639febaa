//! # client
//!
//! Leptos + WASM frontend for NoteHub.
//!
//! This crate contains the root page, UI components, view state, and the REST
//! helpers for the external NoteHub service. It renders on the server under
//! the `ssr` feature and hydrates in the browser under `hydrate`.

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
