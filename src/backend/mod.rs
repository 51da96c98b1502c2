//! Backend service clients.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     address → connect.rs (bounded retry + backoff) → Channel
//!     Channel → <Domain>Client (cheap to clone, shared by all requests)
//!
//! Per request:
//!     handler → dyn <Domain>Backend → tonic unary call → Response | Status
//! ```
//!
//! # Design Decisions
//! - One trait per backend, shaped like the tonic service it fronts
//! - Handlers only see the trait, so tests swap in in-process stubs
//! - No retries after startup: each request calls exactly once

pub mod connect;
pub mod feed;
pub mod prediction;
pub mod profile;

pub use connect::{connect_channel, retry_with_backoff, BootstrapError};
pub use feed::{FeedBackend, FeedClient};
pub use prediction::{PredictionBackend, PredictionClient};
pub use profile::{ProfileBackend, ProfileClient};
