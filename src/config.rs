//! Server configuration.
//!
//! # Design Decisions
//! - All fields have defaults so the server runs with zero configuration
//! - The only external knob is the `APP_PORT` environment variable;
//!   everything else is fixed at startup
//! - An unparseable `APP_PORT` is a startup error, not a silent fallback

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Port used when `APP_PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Root configuration for the diagnostic server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Root directory of mounted secrets.
    pub secrets_root: PathBuf,

    /// Seconds to wait for in-flight requests during shutdown.
    pub drain_timeout_secs: u64,

    /// Per-request deadline in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_PORT}"),
            secrets_root: PathBuf::from("/etc/secrets"),
            drain_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// `APP_PORT` was set but is not a valid port number.
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort { value, source } => {
                write!(f, "invalid APP_PORT {value:?}: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { source, .. } => Some(source),
        }
    }
}

impl ServerConfig {
    /// Build configuration from the process environment.
    ///
    /// `APP_PORT` overrides the listen port; unset or empty keeps 8080.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("APP_PORT") {
            if !port.is_empty() {
                let port: u16 = port.parse().map_err(|source| ConfigError::InvalidPort {
                    value: port.clone(),
                    source,
                })?;
                config.bind_address = format!("0.0.0.0:{port}");
            }
        }

        Ok(config)
    }

    /// Bounded drain window applied during graceful shutdown.
    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.drain_timeout_secs)
    }

    /// Deadline applied to each request by the timeout middleware.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
