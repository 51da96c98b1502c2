//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root configuration for the API gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Run mode (selects log format and verbosity).
    pub mode: RunMode,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Backend RPC service addresses.
    pub backends: BackendsConfig,

    /// Connection bootstrap retry policy.
    pub bootstrap: BootstrapConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Request size limits.
    pub limits: LimitsConfig,
}

impl GatewayConfig {
    /// Effective log level.
    pub fn log_level(&self) -> &str {
        self.observability
            .log_level
            .as_deref()
            .unwrap_or_else(|| self.mode.default_log_level())
    }
}

/// Deployment mode of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Local,
    Development,
    Production,
}

impl RunMode {
    /// JSON log lines are only emitted in production.
    pub fn json_logs(self) -> bool {
        matches!(self, RunMode::Production)
    }

    /// Level used when none is configured: `debug` locally, `info` elsewhere.
    pub fn default_log_level(self) -> &'static str {
        match self {
            RunMode::Local => "debug",
            RunMode::Development | RunMode::Production => "info",
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(RunMode::Local),
            "dev" | "development" => Ok(RunMode::Development),
            "prod" | "production" => Ok(RunMode::Production),
            other => Err(format!("unknown run mode '{}'", other)),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunMode::Local => "local",
            RunMode::Development => "development",
            RunMode::Production => "production",
        };
        f.write_str(name)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Addresses of the three backend services.
///
/// A bare `host:port` is accepted and dialed over plaintext HTTP/2.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BackendsConfig {
    pub profile: String,
    pub feed: String,
    pub prediction: String,
}

/// Retry policy used while establishing backend channels at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Connection attempts per backend before giving up.
    pub max_attempts: u32,

    /// Delay after the first failed attempt, in milliseconds. Doubles per attempt.
    pub base_delay_ms: u64,

    /// Upper bound for a single backoff delay, in milliseconds.
    pub max_delay_ms: u64,

    /// Add up to 10% random jitter to each delay.
    pub jitter: bool,

    /// Timeout for a single connection attempt in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 1000,
            max_delay_ms: 16_000,
            jitter: false,
            connect_timeout_secs: 5,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request deadline in seconds, applied to the HTTP request and to the
    /// outbound RPC call it triggers.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). Unset means the run
    /// mode's default.
    pub log_level: Option<String>,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}
