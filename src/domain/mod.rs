//! Wire records exchanged with HTTP clients.
//!
//! Every record is a plain value scoped to one request; none is persisted by
//! the gateway. Conversion to and from the backend messages lives in
//! [`crate::mapping`].

pub mod feed;
pub mod prediction;
pub mod profile;
