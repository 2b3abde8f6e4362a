//! Application setup and initialization

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use mediagate_core::Config;
use mediagate_storage::Storage;
use std::sync::Arc;

/// Initialize the entire application
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry()?;

    // Fail fast on misconfiguration; missing storage settings are only a warning.
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!(
        environment = %config.server.environment,
        "Configuration loaded and validated successfully"
    );

    let storage = mediagate_storage::create_storage(&config);

    build_app(config, storage)
}

/// Build state and router around an existing storage backend.
pub fn build_app(
    config: Config,
    storage: Arc<dyn Storage>,
) -> Result<(Arc<AppState>, axum::Router)> {
    let state = Arc::new(AppState::new(config, storage));
    let router = routes::setup_routes(&state.config, state.clone())?;
    Ok((state, router))
}
