//! # tenant-console
//!
//! Leptos + WASM admin console for a multi-tenant platform. The crate is
//! organized around the session pipeline — token store, observable session
//! state, auth gateway, request authorizer, and route guard — with pages
//! for login, the dashboard, and tenant management on top.
//!
//! Browser-only code is gated behind the `csr` feature so the crate (and
//! its tests) build natively with no default features.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
