//! Storefront Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod pages;
mod storage;
mod store;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_env();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );
    tracing::info!(api_base = config.api_base, "starting storefront");

    mount_to_body(move || view! { <App config=config /> });
}
