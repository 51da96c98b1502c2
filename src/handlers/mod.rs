//! HTTP route handlers, one per backend service.
//!
//! # Data Flow
//! ```text
//! axum extractors (path, query, JSON body, client source, refresh token)
//!     → validation (400 before any backend call)
//!     → mapping::*_to_rpc
//!     → dyn <Domain>Backend (one unary call, request deadline attached)
//!     → mapping::*_from_rpc → JSON 200
//!     ↘ Status → ApiError::from_rpc → plain-text error
//! ```
//!
//! # Design Decisions
//! - Handlers hold the backend behind an `Arc<dyn Trait>`, so tests inject stubs
//! - One backend call per request; no retries on the request path
//! - Each handler logs the operation it performs with structured fields

pub mod feed;
pub mod prediction;
pub mod profile;

pub use feed::FeedHandler;
pub use prediction::PredictionHandler;
pub use profile::ProfileHandler;

/// Mount names and prefixes used by the gateway.
pub mod mount {
    pub const PROFILE: (&str, &str) = ("profile", "/profile");
    pub const FEED: (&str, &str) = ("feed", "/feed");
    pub const PREDICTION: (&str, &str) = ("prediction", "/prediction");
}

use crate::http::error::ApiError;

/// Reject an empty path identifier.
pub(crate) fn require_id<'a>(raw: &'a str, field: &str) -> Result<&'a str, ApiError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(ApiError::bad_request(format!("{} must not be empty", field)));
    }
    Ok(id)
}
