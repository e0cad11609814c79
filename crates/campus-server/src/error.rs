//! Error types for the Campus server binary.

use campus_api::server::ServerError;

use crate::config::ConfigError;

/// Errors that can abort server startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] ServerError),
}
