//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, deadline → CallContext)
//!     → extract.rs (JSON body, client source, refresh token)
//!     → [handlers call the backend]
//!     → error.rs (RPC status → HTTP status, plain-text body)
//!     → Send to client
//! ```

pub mod error;
pub mod extract;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use extract::{ClientSource, JsonBody, RefreshToken};
pub use request::{CallContext, RpcDeadline, X_REQUEST_ID};
pub use server::GatewayServer;
