//! # cardkey-console
//!
//! Leptos + WASM admin console for card license keys and user accounts,
//! backed by an external REST API with bearer-token auth.
//!
//! The session (token + cached profile) is persisted in browser
//! localStorage, re-validated against the server at startup, and torn
//! down whenever the server rejects the token. Collections are
//! server-authoritative: every mutation is followed by a full re-fetch.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
