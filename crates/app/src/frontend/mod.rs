//! Leptos frontend (WASM entry point, auth glue, routed pages).

pub mod app;
pub mod auth;
pub mod components;
pub mod pages;

use wasm_bindgen::prelude::*;

/// WASM entry point, called automatically when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Complete a pending sign-in redirect before the first render.
    auth::handle_redirect();

    leptos::mount_to_body(app::App);
}
