#![allow(warnings)]
//! Link Cards Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod layout;
mod logging;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, fallback) = AppConfig::load();
    logging::init(&config.log_level);
    if let Some(err) = fallback {
        tracing::warn!(error = %err, "bundled config rejected, using defaults");
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
