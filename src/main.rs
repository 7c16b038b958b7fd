//! Portfolio Gallery Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod render;
mod router;
mod seed;
mod state;
mod store;

use app::App;
use config::GalleryConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, errors) = GalleryConfig::from_document();
    logging::init(config.log_level);
    for e in errors {
        tracing::warn!("[CONFIG] {}, using default", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
