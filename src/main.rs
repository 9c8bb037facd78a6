//! User Portal Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod logger;
mod models;
mod pages;
mod redirect;
mod session;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::log_level());
    log::info!("[APP] Starting, API at {}", config::API_BASE_URL.unwrap_or("<unset>"));
    mount_to_body(App);
}
