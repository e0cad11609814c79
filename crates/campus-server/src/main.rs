//! Campus server binary.
//!
//! Wires the seeded store, the shared application state, and the Axum
//! router into a running HTTP server.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `campus-config.yaml`
//! 3. Seed the in-memory store with the demo dataset
//! 4. Build the shared application state
//! 5. Serve until terminated

mod config;
mod error;

use std::path::Path;

use campus_api::server::{start_server, ServerConfig};
use campus_api::state::AppState;
use campus_store::demo_store;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CampusConfig;
use crate::error::StartupError;

/// Path to the configuration file, relative to the working directory.
const CONFIG_PATH: &str = "campus-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading or the serve loop fails.
#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // 1. Initialize structured logging. RUST_LOG wins over the config
    //    file, which wins over the "info" default.
    let config = CampusConfig::load(Path::new(CONFIG_PATH))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.filter.clone())),
        )
        .with_target(true)
        .init();

    info!("campus-server starting");

    // 2. Configuration is loaded; log the effective bind address.
    info!(
        host = config.server.host,
        port = config.server.port,
        "configuration loaded"
    );

    // 3. Seed the in-memory store.
    let store = demo_store();
    info!(students = store.student_count(), "demo store seeded");

    // 4. Build shared state.
    let state = AppState::new(store);

    // 5. Serve.
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
