//! LuminaLens - Photography portfolio with a built-in CMS
//!
//! Main entry point. An optional first argument is a route path such as
//! `/portfolio/weddings` to open at start.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use anyhow::Result;
use app_core::{AppConfig, AppState, Route};

fn main() -> Result<()> {
    // Initialize logging and panic hook first
    let _log_guard = app_log::init()?;

    // Clean up old logs (7 days)
    if let Err(e) = app_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("LuminaLens starting...");

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {}", e);
        AppConfig::default()
    });

    // Open the content store and seed it on first start
    let store = app_core::open_store(&config)?;
    let state = AppState::new(config, store)?;

    let start = std::env::args()
        .nth(1)
        .map(|path| Route::parse(&path))
        .unwrap_or_default();

    // Run the application
    app::run(state, start)
}
