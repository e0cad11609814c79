//! Configuration loading for the Campus server binary.
//!
//! The canonical configuration lives in `campus-config.yaml` at the
//! project root. A missing file is not an error; every field has a
//! default matching the demo deployment (bind `0.0.0.0:3000`, `info`
//! logging). Environment variables override the file for the bind
//! address: `CAMPUS_HOST` and `CAMPUS_PORT`.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unusable value.
    #[error("invalid environment override: {0}")]
    EnvOverride(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CampusConfig {
    /// HTTP bind settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// The `server` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The `logging` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Tracing filter directive (e.g. `info` or `campus_api=debug`).
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    3000
}

fn default_filter() -> String {
    String::from("info")
}

impl CampusConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// A missing file yields the defaults. After parsing, `CAMPUS_HOST`
    /// and `CAMPUS_PORT` override the `server` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if an existing file cannot be read,
    /// [`ConfigError::Yaml`] if its content does not parse, or
    /// [`ConfigError::EnvOverride`] if `CAMPUS_PORT` is not a valid
    /// port number.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_yml::from_str(&content)?
        } else {
            Self::default()
        };

        if let Ok(host) = std::env::var("CAMPUS_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("CAMPUS_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| ConfigError::EnvOverride(format!("invalid CAMPUS_PORT: {e}")))?;
        }

        Ok(config)
    }
}
