//! BookCompass Frontend Entry Point

mod api;
mod app;
mod basket;
mod catalog;
mod components;
mod config;
mod context;
mod dashboard;
mod error;
mod markdown;
mod models;
mod pages;
mod storage;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = browser_logger::init(config::log_level(), config::LOG_BUFFER_CAPACITY) {
        web_sys::console::error_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("BookCompass starting, API at {}", config::API_BASE_URL);
    mount_to_body(App);
}
