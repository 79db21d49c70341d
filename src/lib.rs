//! # portfolio
//!
//! Leptos + WASM front-end for a small personal portfolio site. Displays a
//! list of projects fetched from a remote API and lets visitors attach a
//! numeric rating (with an optional comment) to a project.
//!
//! This crate contains pages, components, client-side state, and the REST
//! API helpers for the portfolio backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
