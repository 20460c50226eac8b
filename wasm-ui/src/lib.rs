//! Web UI for gsi-tutorial-rs
//!
//! A Yew-based single-page walkthrough for configuring Google Sign-In:
//! a step navigator with copyable code snippets and a toggleable
//! complete demo page.

mod app;
mod clipboard;
mod components;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
