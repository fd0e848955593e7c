//! # client
//!
//! Leptos + WASM frontend for the Screenwise submission-screening product:
//! the marketing landing page, the two-step signup/login flow, and the
//! dashboard shell over static mock data.
//!
//! Routing and view selection live in `state::nav`, the auth form state
//! machine in `state::auth_form`, and the two backend calls in `net::api`.

pub mod app;
pub mod components;
pub mod config;
pub mod mock;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
