//! # client
//!
//! Leptos + WASM frontend for the neurucare brand site.
//!
//! This crate contains the pages, components, session state, validation
//! rules, and the simulated auth backend. The root `App` is rendered on the
//! server by the host binary and hydrated in the browser through
//! [`hydrate`].

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
