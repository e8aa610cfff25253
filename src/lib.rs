pub mod api;
pub mod components;
pub mod config;
pub mod forms;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

pub mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting shop admin frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__SHOP_ADMIN_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
