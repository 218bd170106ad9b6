use leptos::*;

pub mod api;
mod app;
mod components;
pub mod config;
mod pages;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use app::{app_root, mount_app, App};

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("starting ROOM_911 frontend");

    // Runtime config loads in the background; requests made before it lands use the cached
    // globals or the default base URL.
    spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialised");
    });

    mount_app();
}
