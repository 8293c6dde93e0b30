//! # kikou-client
//!
//! Leptos + WASM frontend for the キコウ！ landing page.
//!
//! This crate contains the page, its components, the static site content,
//! and the small piece of UI state that drives the slide-in menu and the
//! legal modals. The `ssr` feature is enabled by `kikou-server`; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating landing page");
    leptos::mount::hydrate_body(app::App);
}
