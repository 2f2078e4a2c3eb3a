//! # client
//!
//! Leptos + WASM frontend for the grocery list.
//!
//! This crate contains the page, components, client-side state, and the
//! REST helpers for the external items API. The `hydrate` feature builds
//! the browser bundle; `ssr` is enabled by the host server for rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
