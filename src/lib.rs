//! # careercrafter-client
//!
//! Leptos + WASM frontend for the CareerCrafter job board. All
//! persistence, matching, and authorization enforcement live in the
//! external HTTP API; this crate is the browser client: session and
//! credential handling, role-gated routing, and the feature pages for
//! jobs, applications, profiles, and resumes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: wire up panic reporting and console logging,
/// then hydrate the application.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
