//! Profile conversions.
//!
//! The profile service carries dates as Unix epoch seconds; the wire side uses
//! `YYYY-MM-DD` on input and RFC 3339 timestamps on output.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::profile as wire;
use crate::mapping::MappingError;
use crate::rpc::profile as rpc;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn source_data(ip: impl Into<String>, user_agent: impl Into<String>) -> rpc::SourceData {
    rpc::SourceData {
        ip: ip.into(),
        user_agent: user_agent.into(),
    }
}

pub fn login_to_rpc(body: wire::LoginRequest, source: rpc::SourceData) -> rpc::LoginRequest {
    rpc::LoginRequest {
        email: body.email,
        password: body.password,
        source: Some(source),
    }
}

pub fn login_from_rpc(message: rpc::LoginResponse) -> Result<wire::LoginResponse, MappingError> {
    Ok(wire::LoginResponse {
        user_id: user_id_from_rpc(message.user_id.as_ref())?,
        tokens: tokens_from_rpc(message.tokens.unwrap_or_default()),
    })
}

pub fn tokens_from_rpc(message: rpc::TokenPair) -> wire::TokenResponse {
    wire::TokenResponse {
        access_token: message.access_token,
        refresh_token: message.refresh_token,
    }
}

/// Fails on a malformed `birthDate`; the request must be rejected before any call.
pub fn register_to_rpc(body: wire::RegisterRequest) -> Result<rpc::RegisterRequest, MappingError> {
    let birthdate = date_to_epoch(&body.birth_date)?;
    Ok(rpc::RegisterRequest {
        fullname: body.full_name,
        email: body.email,
        phone: body.phone,
        password: body.password,
        birthdate,
    })
}

pub fn register_from_rpc(
    message: rpc::RegisterResponse,
) -> Result<wire::RegisterResponse, MappingError> {
    Ok(wire::RegisterResponse {
        user_id: user_id_from_rpc(message.user_id.as_ref())?,
    })
}

pub fn user_request(user_id: Uuid) -> rpc::UserRequest {
    rpc::UserRequest {
        user_id: Some(rpc::Uuid {
            value: user_id.to_string(),
        }),
    }
}

pub fn user_from_rpc(message: rpc::UserResponse) -> Result<wire::UserResponse, MappingError> {
    Ok(wire::UserResponse {
        user_id: user_id_from_rpc(message.user_id.as_ref())?,
        full_name: message.fullname,
        email: message.email,
        phone: message.phone,
        birth_date: epoch_to_datetime(message.birthdate)?,
        register_date: epoch_to_datetime(message.registerdate)?,
    })
}

/// Parse a user id supplied by a client.
pub fn parse_user_id(raw: &str) -> Result<Uuid, MappingError> {
    Uuid::parse_str(raw.trim()).map_err(|_| MappingError::InvalidUserId(raw.to_string()))
}

fn user_id_from_rpc(id: Option<&rpc::Uuid>) -> Result<Uuid, MappingError> {
    let id = id.ok_or(MappingError::MissingField("user_id"))?;
    Uuid::parse_str(&id.value).map_err(|_| MappingError::InvalidUserId(id.value.clone()))
}

/// Midnight UTC of a `YYYY-MM-DD` date, as epoch seconds.
pub fn date_to_epoch(raw: &str) -> Result<i64, MappingError> {
    let date = NaiveDate::parse_from_str(raw.trim(), BIRTH_DATE_FORMAT)
        .map_err(|_| MappingError::InvalidDate(raw.to_string()))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp())
}

pub fn epoch_to_datetime(seconds: i64) -> Result<DateTime<Utc>, MappingError> {
    DateTime::from_timestamp(seconds, 0).ok_or(MappingError::TimestampOutOfRange(seconds))
}
