//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts, attempts and body limit > 0, addresses present)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    for (field, address) in [
        ("backends.profile", &config.backends.profile),
        ("backends.feed", &config.backends.feed),
        ("backends.prediction", &config.backends.prediction),
    ] {
        if address.trim().is_empty() {
            errors.push(ValidationError::new(field, "backend address is required"));
        }
    }

    if config.bootstrap.max_attempts == 0 {
        errors.push(ValidationError::new("bootstrap.max_attempts", "must be at least 1"));
    }
    if config.bootstrap.base_delay_ms > config.bootstrap.max_delay_ms {
        errors.push(ValidationError::new(
            "bootstrap.base_delay_ms",
            "must not exceed bootstrap.max_delay_ms",
        ));
    }
    if config.bootstrap.connect_timeout_secs == 0 {
        errors.push(ValidationError::new("bootstrap.connect_timeout_secs", "must be positive"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be positive"));
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::new("limits.max_body_size", "must be positive"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.backends.profile = "127.0.0.1:50051".into();
        config.backends.feed = "127.0.0.1:50052".into();
        config.backends.prediction = "127.0.0.1:50053".into();
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = valid_config();
        config.backends.feed.clear();
        config.bootstrap.max_attempts = 0;
        config.timeouts.request_secs = 0;
        config.limits.max_body_size = 0;
        config.listener.bind_address = "nowhere".into();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "listener.bind_address",
                "backends.feed",
                "bootstrap.max_attempts",
                "timeouts.request_secs",
                "limits.max_body_size",
            ]
        );
    }

    #[test]
    fn test_backoff_bounds() {
        let mut config = valid_config();
        config.bootstrap.base_delay_ms = 5000;
        config.bootstrap.max_delay_ms = 100;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "bootstrap.base_delay_ms");
    }
}
