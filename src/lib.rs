//! # unishare-client
//!
//! Leptos + WASM frontend for the UniShare document-sharing platform.
//!
//! This crate contains pages, components, application state, network types,
//! and the bearer-token HTTP client. Session restoration, route guarding,
//! and role-based access live in `state::session` and `components`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
