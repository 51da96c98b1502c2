//! Field mapping between wire records and backend messages.
//!
//! # Data Flow
//! ```text
//! wire record (domain::*)  ──*_to_rpc──▶  rpc message (rpc::*)
//! wire record (domain::*)  ◀─*_from_rpc── rpc message (rpc::*)
//! ```
//!
//! # Design Decisions
//! - Pure functions, no I/O and no logging
//! - Conversions take ownership so strings and collections move instead of cloning
//! - Absent collections become empty sequences, never null
//! - Fallible only where a format changes (dates, user ids)

pub mod feed;
pub mod prediction;
pub mod profile;

use thiserror::Error;

/// A value that could not be carried across the wire/RPC boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("date '{0}' is not in YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("'{0}' is not a valid user id")]
    InvalidUserId(String),

    #[error("timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("field '{0}' is missing")]
    MissingField(&'static str),
}
