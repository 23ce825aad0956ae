#![allow(non_snake_case)]

//! WatchDog - browser client for the uptime-monitoring API.

pub mod bindings;
pub mod components;
pub mod config;
pub mod logging;
pub mod services;
pub mod utils;

mod app;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    logging::init(log::LevelFilter::Info);
    let config = AppConfig::load();
    logging::init(config.level_filter());
    log::info!("Starting WatchDog frontend v{VERSION}");

    // Remove loading spinner
    if let Some(loader) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app-loading"))
    {
        loader.remove();
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
