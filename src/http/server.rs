//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Mount the registry's handlers into one Axum router
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Answer unknown paths with a plain-text 404
//! - Bind server to listener and drain on shutdown

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{middleware, Extension, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::request::{RpcDeadline, X_REQUEST_ID};
use crate::observability::metrics;
use crate::routing::HandlerRegistry;

/// HTTP front of the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a server exposing every handler in `registry`.
    pub fn new(config: GatewayConfig, registry: &HandlerRegistry) -> Self {
        let router = Self::build_router(&config, registry);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost first: request ID, trace, timeout, body limits,
    /// deadline, metrics.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, registry: &HandlerRegistry) -> Router {
        let deadline = Duration::from_secs(config.timeouts.request_secs);

        registry
            .router()
            .fallback(no_route)
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(Extension(RpcDeadline(deadline)))
            .layer(DefaultBodyLimit::max(config.limits.max_body_size))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::new(deadline))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request| {
                        let request_id = request
                            .headers()
                            .get(X_REQUEST_ID)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            path = %request.uri().path(),
                            request_id = %request_id,
                        )
                    })
                    // Failures are logged once, where they are translated.
                    .on_failure(()),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for driving without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mode = %self.config.mode,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

async fn no_route(request: Request) -> impl IntoResponse {
    tracing::debug!(method = %request.method(), path = %request.uri().path(), "No route matched");
    (StatusCode::NOT_FOUND, "404 page not found")
}
