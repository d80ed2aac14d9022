//! Browser dashboard for multi-cloud IP address allocation state.
//!
//! ARCHITECTURE
//! ============
//! - `net`: wire types, the transport seam, and the bearer-carrying API client.
//! - `state`: plain state models shared through Leptos context.
//! - `services`: the session controller (auth lifecycle, dashboard loading,
//!   notes) plus login strategies and URL handling.
//! - `views`: pure view models derived from the dashboard snapshot.
//! - `components` / `pages`: Leptos rendering.
//! - `util`: time formatting, CSV export, clipboard and download helpers.
//!
//! Everything that touches the browser is behind the `csr` feature, so the
//! crate builds and tests natively without it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;
pub mod views;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::DashboardConfig;

    console_error_panic_hook::set_once();

    let level = DashboardConfig::from_build_env().map_or(log::LevelFilter::Info, |c| c.log_level);
    if let Some(level) = level.to_level() {
        let _ = console_log::init_with_level(level);
    }

    let config = DashboardConfig::resolve();
    log::info!("ipam-dashboard: api {} ({:?} login)", config.api_base_url, config.auth_mode);
    leptos::mount::mount_to_body(move || view! { <App config/> });
}
