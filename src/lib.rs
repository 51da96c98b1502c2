//! Car marketplace HTTP gateway library.
//!
//! Exposes a JSON-over-HTTP API in front of three gRPC backends (profile,
//! listing feed, price prediction) and translates between the two.

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;

// Backend contracts
pub mod backend;
pub mod domain;
pub mod mapping;
pub mod rpc;

// Route groups
pub mod handlers;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
pub use routing::{HandlerRegistry, RouteHandler};
