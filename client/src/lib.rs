//! # client
//!
//! Leptos + WASM frontend for Ledgerly.
//!
//! This crate holds the pages, components and client state, and the two
//! client-side realizations of the route guard (`components::protected` and
//! `util::auth::use_protected_route`). The decision logic itself lives in the
//! `access` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
