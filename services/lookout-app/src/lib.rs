//! Lookout Dashboard - Leptos frontend
//!
//! Reactive web UI for the uptime monitor list: a polling data loader,
//! list/grid presentation, and create/edit/delete actions over the
//! backend's monitor API.

pub mod api;
pub mod app;
pub mod components;
pub mod dialog;
pub mod state;
pub mod status;

pub use app::App;

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(App);
}
