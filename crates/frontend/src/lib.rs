pub mod app;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Client-side render of the demo form into `<body>`.
#[wasm_bindgen]
pub fn mount_app() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount_app();
}
