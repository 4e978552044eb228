//! Antitoken landing page
//!
//! Client-side rendered Leptos app. Static sections come from `lib_core::view`;
//! the voting section talks to injected Solana wallets.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use services::document::{apply_head_tags, hide_loading_screen};

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Antitoken landing page starting...");

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid build configuration: {}", e);
            hide_loading_screen();
            leptos::mount::mount_to_body(move || {
                view! { <p class="config-error">{e.user_message()}</p> }
            });
            return;
        }
    };

    apply_head_tags(&lib_core::view::head_tags(&config));
    hide_loading_screen();

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
