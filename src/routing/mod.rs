//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RouteHandler::setup_rpc(channel)      (one per backend)
//!     → registry.rs (register name + prefix, reject duplicates)
//!     → freeze as immutable HandlerRegistry
//!     → HandlerRegistry::router() nests each handler's routes under its prefix
//!
//! Per request:
//!     axum path match → handler route → backend call
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Each handler owns only the paths below its prefix
//! - Deterministic: same input always matches same route

pub mod handler;
pub mod registry;

pub use handler::RouteHandler;
pub use registry::{HandlerRegistry, RegistryBuilder};
