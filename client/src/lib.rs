//! # client
//!
//! Leptos + WASM front end for the monthly guess poll.
//!
//! This crate contains the poll page, the canvas and results components, the
//! poll and results state machines, the outbound form/results calls, and the
//! local-storage voted flag. It drives the `canvas` crate for the hand-drawn
//! ballot and the results bar chart.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging, read the embedded config, hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }

    let Some(config) = config::read_embedded() else {
        leptos::logging::error!("poll config missing from page; widget not started");
        return;
    };
    leptos::mount::hydrate_body(move || view! { <App config/> });
}
