//! Per-request call context.
//!
//! # Responsibilities
//! - Carry the request ID assigned by the outer layer
//! - Carry the inbound deadline so backend calls share it
//! - Build `tonic::Request`s stamped with both
//!
//! # Design Decisions
//! - Request ID is assigned by `SetRequestIdLayer` before anything else runs
//! - The same ID is echoed to the client and forwarded as RPC metadata
//! - Deadline is attached as the RPC timeout; dropping the handler future
//!   cancels the call

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tonic::metadata::MetadataValue;

use crate::http::error::ApiError;
use crate::http::extract::RefreshToken;
use crate::rpc::profile::REFRESH_TOKEN_METADATA;

/// Header carrying the correlation ID, in both directions.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Deadline applied to every backend call of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpcDeadline(pub Duration);

/// Request-scoped data needed to call a backend.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub request_id: Option<String>,
    pub deadline: Option<Duration>,
}

impl CallContext {
    /// Wrap `message` with the request's deadline and ID.
    pub fn request<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);

        if let Some(deadline) = self.deadline {
            request.set_timeout(deadline);
        }

        if let Some(id) = &self.request_id {
            if let Ok(value) = MetadataValue::try_from(id.as_str()) {
                request.metadata_mut().insert(X_REQUEST_ID, value);
            }
        }

        request
    }

    /// Like [`CallContext::request`], with the refresh token attached as metadata.
    pub fn authorized<T>(
        &self,
        message: T,
        token: &RefreshToken,
    ) -> Result<tonic::Request<T>, ApiError> {
        let value = MetadataValue::try_from(token.as_str())
            .map_err(|_| ApiError::bad_request("refreshToken header is not valid ASCII"))?;

        let mut request = self.request(message);
        request.metadata_mut().insert(REFRESH_TOKEN_METADATA, value);
        Ok(request)
    }
}

impl<S> FromRequestParts<S> for CallContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let deadline = parts.extensions.get::<RpcDeadline>().map(|d| d.0);

        Ok(Self {
            request_id,
            deadline,
        })
    }
}
