//! Backend channel bootstrap.
//!
//! # Responsibilities
//! - Turn a configured address into a connected `Channel`
//! - Retry failed attempts with exponential backoff
//! - Report exhaustion as a fatal startup error
//!
//! # Design Decisions
//! - Runs once per backend before the listener binds
//! - The backoff follows every failed attempt, so the worst case waits the
//!   whole schedule (1+2+4+8+16 s with defaults)
//! - Errors are returned, never panicked; `main` decides to exit

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tonic::transport::{Channel, Endpoint};

use crate::config::BootstrapConfig;
use crate::resilience::backoff::{calculate_backoff, with_jitter};

/// Fatal startup failure for one backend.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid backend address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("can't connect to {address} after {attempts} attempts, error: {last_error}")]
    Exhausted {
        address: String,
        attempts: u32,
        last_error: String,
    },
}

/// Connect to `address`, retrying per `policy`.
pub async fn connect_channel(
    address: &str,
    policy: &BootstrapConfig,
) -> Result<Channel, BootstrapError> {
    let endpoint = endpoint(address, policy)?;
    retry_with_backoff(address, policy, || endpoint.connect()).await
}

/// Build an endpoint; a bare `host:port` is dialed over plaintext.
pub fn endpoint(address: &str, policy: &BootstrapConfig) -> Result<Endpoint, BootstrapError> {
    let address = address.trim();
    let uri = if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    };

    Endpoint::from_shared(uri)
        .map(|e| e.connect_timeout(Duration::from_secs(policy.connect_timeout_secs)))
        .map_err(|e| BootstrapError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// Run `op` until it succeeds or `policy.max_attempts` is spent.
pub async fn retry_with_backoff<T, E, F, Fut>(
    address: &str,
    policy: &BootstrapConfig,
    mut op: F,
) -> Result<T, BootstrapError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=max_attempts {
        match op().await {
            Ok(value) => {
                tracing::info!(address = %address, attempt, "Backend connected");
                return Ok(value);
            }
            Err(e) => {
                last_error = e.to_string();

                let mut delay =
                    calculate_backoff(attempt, policy.base_delay_ms, policy.max_delay_ms);
                if policy.jitter {
                    delay = with_jitter(delay);
                }

                tracing::warn!(
                    address = %address,
                    attempt,
                    max_attempts,
                    delay = ?delay,
                    error = %last_error,
                    "Backend connection failed"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }

    Err(BootstrapError::Exhausted {
        address: address.to_string(),
        attempts: max_attempts,
        last_error,
    })
}
