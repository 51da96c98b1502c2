//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{GatewayConfig, RunMode};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable selecting the run mode.
pub const ENV_MODE: &str = "MODE";
/// Environment variable overriding the listen port.
pub const ENV_SERVE_PORT: &str = "SERVE_PORT";
pub const ENV_PROFILE_ADDR: &str = "PROFILE_SERVICE_ADDR";
pub const ENV_FEED_ADDR: &str = "FEED_SERVICE_ADDR";
pub const ENV_PREDICTION_ADDR: &str = "PREDICTION_SERVICE_ADDR";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file, then overlay the environment.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;
    finalize(config.apply_env())
}

/// Build configuration from defaults plus the environment only.
pub fn load_from_env() -> Result<GatewayConfig, ConfigError> {
    finalize(GatewayConfig::default().apply_env())
}

fn finalize(config: GatewayConfig) -> Result<GatewayConfig, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load variables from a `.env` file into the process environment.
///
/// Returns `Ok(false)` when the file does not exist. Variables already set in
/// the environment are not overwritten.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ConfigError::EnvFile(e)),
    }
}

impl GatewayConfig {
    /// Overlay values from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary key lookup. Empty values are ignored.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(mode) = get(ENV_MODE) {
            match mode.parse::<RunMode>() {
                Ok(mode) => self.mode = mode,
                Err(e) => tracing::warn!(error = %e, "Ignoring {}, keeping {}", ENV_MODE, self.mode),
            }
        }

        if let Some(port) = get(ENV_SERVE_PORT) {
            let host = self
                .listener
                .bind_address
                .rsplit_once(':')
                .map(|(host, _)| host.to_string())
                .unwrap_or_else(|| "0.0.0.0".to_string());
            self.listener.bind_address = format!("{}:{}", host, port.trim());
        }

        if let Some(addr) = get(ENV_PROFILE_ADDR) {
            self.backends.profile = addr;
        }
        if let Some(addr) = get(ENV_FEED_ADDR) {
            self.backends.feed = addr;
        }
        if let Some(addr) = get(ENV_PREDICTION_ADDR) {
            self.backends.prediction = addr;
        }

        self
    }
}
