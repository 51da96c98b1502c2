//! Startup orchestration.
//!
//! # Responsibilities
//! - Establish one channel per backend, in a fixed order
//! - Build each handler around its channel and register it
//! - Freeze the registry before the listener binds
//!
//! # Design Decisions
//! - Fail fast: a backend that stays unreachable is fatal
//! - Backends connect in order, not concurrently, so logs read top to bottom

use thiserror::Error;

use crate::backend::{connect_channel, BootstrapError};
use crate::config::{BootstrapConfig, GatewayConfig};
use crate::handlers::{mount, FeedHandler, PredictionHandler, ProfileHandler};
use crate::routing::{HandlerRegistry, RouteHandler};

/// Fatal startup failure.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{backend} backend: {source}")]
    Backend {
        backend: &'static str,
        #[source]
        source: BootstrapError,
    },
}

/// Connect every backend and register its handler.
pub async fn bootstrap_registry(config: &GatewayConfig) -> Result<HandlerRegistry, StartupError> {
    let policy = &config.bootstrap;
    let backends = &config.backends;

    let profile: ProfileHandler = connect_handler(mount::PROFILE.0, &backends.profile, policy).await?;
    let feed: FeedHandler = connect_handler(mount::FEED.0, &backends.feed, policy).await?;
    let prediction: PredictionHandler =
        connect_handler(mount::PREDICTION.0, &backends.prediction, policy).await?;

    let registry = HandlerRegistry::builder()
        .register(mount::PROFILE.0, mount::PROFILE.1, profile)
        .register(mount::FEED.0, mount::FEED.1, feed)
        .register(mount::PREDICTION.0, mount::PREDICTION.1, prediction)
        .build();

    tracing::info!(handlers = ?registry, "Handler registry ready");
    Ok(registry)
}

async fn connect_handler<H: RouteHandler>(
    backend: &'static str,
    address: &str,
    policy: &BootstrapConfig,
) -> Result<H, StartupError> {
    tracing::info!(backend, address = %address, "Connecting to backend");

    let channel = connect_channel(address, policy)
        .await
        .map_err(|source| StartupError::Backend { backend, source })?;

    Ok(H::setup_rpc(channel))
}
