//! Application setup and initialization
//!
//! All startup wiring extracted from main.rs: configuration validation,
//! database pool and migrations, storage backend, routes.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use photostore_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;
    config.export_aws_credentials();

    tracing::info!("Configuration loaded and validated");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config, pool, storage));

    // Setup routes
    let router = routes::build_router(state.clone());

    Ok((state, router))
}
