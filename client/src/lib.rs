//! # client
//!
//! Leptos + WASM front end for the study planner: login, the plan form with
//! topic suggestions and results, the chat widget, the camera feedback
//! widget, and the AI-provider settings page.
//!
//! Build with `--features csr` for the browser. Without it the crate compiles
//! natively so controller logic can be tested against a fake API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
