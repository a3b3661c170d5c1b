pub mod bindings;
pub mod components;
pub mod content;
pub mod services;
pub mod utils;

mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"Starting Atelier Lumen frontend".into());

    // Remove the static loading shell before mounting.
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(loader) = document.get_element_by_id("app-loading") {
                loader.remove();
            }
        }
    }

    leptos::mount::mount_to_body(app::App);
}
