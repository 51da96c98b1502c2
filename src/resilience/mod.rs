//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Backend bootstrap:
//!     → backoff.rs (delay schedule between connection attempts)
//!
//! Per request:
//!     → deadline on the inbound request (TimeoutLayer)
//!     → same deadline forwarded as the RPC timeout
//! ```
//!
//! # Design Decisions
//! - Retries happen only while establishing channels at startup
//! - Request-path calls are attempted exactly once; failures go to the error translator
//! - Dropping the request future cancels the in-flight RPC

pub mod backoff;
