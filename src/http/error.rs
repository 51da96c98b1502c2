//! Error translation for handler failures.
//!
//! # Responsibilities
//! - Map backend RPC status codes to HTTP status codes
//! - Separate RPC-level failures from failures below the RPC layer
//! - Render every failure as a plain-text body
//!
//! # Status Table
//! ```text
//! OK               → 200
//! InvalidArgument  → 400
//! Unauthenticated  → 401
//! PermissionDenied → 403
//! NotFound         → 404
//! AlreadyExists    → 409
//! Internal         → 500
//! anything else    → 500
//! ```

use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tonic::{Code, Status};

use crate::observability::metrics;

/// Failure produced by a route handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input rejected before any backend call.
    #[error("{0}")]
    BadRequest(String),

    /// Request rejected by the HTTP layer itself (e.g. body too large).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Backend call failed; `status` comes from the mapping table.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// Gateway-side failure after a successful call.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Display) -> Self {
        ApiError::BadRequest(message.to_string())
    }

    pub fn internal(message: impl Display) -> Self {
        ApiError::Internal(message.to_string())
    }

    /// Translate a failed backend call.
    ///
    /// A `Status` carrying an error source was synthesized by the client from
    /// a transport failure rather than returned by the backend; it is logged
    /// at warn and answered with 500 and the raw error text.
    pub fn from_rpc(context: &str, status: Status) -> Self {
        metrics::record_rpc_error(status.code());

        if let Some(source) = std::error::Error::source(&status) {
            let message = source.to_string();
            tracing::warn!(context = %context, error = %message, "Non-RPC error");
            return ApiError::Upstream {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            };
        }

        let http_status = http_status(status.code());
        let message = format!("{}: {}", context, status.message());
        tracing::error!(
            code = ?status.code(),
            http_status = http_status.as_u16(),
            "{}",
            message
        );

        ApiError::Upstream {
            status: http_status,
            message,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// HTTP status for an RPC status code.
pub fn http_status(code: Code) -> StatusCode {
    match code {
        Code::Ok => StatusCode::OK,
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::AlreadyExists => StatusCode::CONFLICT,
        Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Upstream failures were logged when translated.
        match &self {
            ApiError::BadRequest(message) | ApiError::Rejected { message, .. } => {
                tracing::warn!(error = %message, "Request rejected");
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
            }
            ApiError::Upstream { .. } => {}
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
