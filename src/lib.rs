//! # auth-web
//!
//! Leptos + WASM front-end for the session-based authentication service.
//! Renders the login, registration, and dashboard pages and mirrors the
//! server-issued cookie session as a small in-memory auth state.
//!
//! All real authentication (password checks, token issuance, cookie
//! management) lives in the backend; the session cookie is opaque to this
//! crate and rides along automatically via the browser cookie jar.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
