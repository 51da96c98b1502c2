//! Request extractors shared by the route handlers.
//!
//! # Responsibilities
//! - Decode JSON bodies, rejecting anything malformed with 400
//! - Resolve the caller's IP and user agent
//! - Require the `refreshToken` header where a session is involved
//!
//! # Design Decisions
//! - Bodies are decoded regardless of `Content-Type`
//! - Client IP prefers the first `X-Forwarded-For` entry over the socket peer

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, FromRequest, FromRequestParts, Request};
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::http::error::ApiError;

/// Header naming the caller's session token.
pub const REFRESH_TOKEN_HEADER: &str = "refreshtoken";
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// JSON request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::bad_request(format!("invalid JSON body: {}", e)))
    }
}

/// Where the request came from, as reported to the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientSource {
    pub ip: String,
    pub user_agent: String,
}

impl ClientSource {
    pub fn from_parts(headers: &HeaderMap, peer: Option<SocketAddr>) -> Self {
        let forwarded = headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let ip = match forwarded {
            Some(ip) => ip.to_string(),
            None => peer.map(|addr| addr.ip().to_string()).unwrap_or_default(),
        };

        let user_agent = headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Self { ip, user_agent }
    }
}

impl<S> FromRequestParts<S> for ClientSource
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent when the router is driven without a socket (tests).
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self::from_parts(&parts.headers, peer))
    }
}

/// Value of the required `refreshToken` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RefreshToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(REFRESH_TOKEN_HEADER)
            .ok_or_else(|| ApiError::bad_request("refreshToken header is required"))?;

        let token = value
            .to_str()
            .map_err(|_| ApiError::bad_request("refreshToken header is not valid ASCII"))?
            .trim();

        if token.is_empty() {
            return Err(ApiError::bad_request("refreshToken header is required"));
        }

        Ok(Self(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let peer: SocketAddr = "192.168.1.20:51234".parse().unwrap();

        let source = ClientSource::from_parts(
            &headers(&[
                ("x-forwarded-for", " 203.0.113.9 , 10.0.0.1"),
                ("user-agent", "curl/8.0"),
            ]),
            Some(peer),
        );
        assert_eq!(source.ip, "203.0.113.9");
        assert_eq!(source.user_agent, "curl/8.0");
    }

    #[test]
    fn test_client_ip_falls_back_to_peer() {
        let peer: SocketAddr = "192.168.1.20:51234".parse().unwrap();

        let source = ClientSource::from_parts(&headers(&[]), Some(peer));
        assert_eq!(source.ip, "192.168.1.20");
        assert_eq!(source.user_agent, "");

        let source = ClientSource::from_parts(&headers(&[("x-forwarded-for", " ")]), Some(peer));
        assert_eq!(source.ip, "192.168.1.20");

        let source = ClientSource::from_parts(&headers(&[]), None);
        assert_eq!(source.ip, "");
    }

    #[tokio::test]
    async fn test_refresh_token_header() {
        let request = axum::http::Request::builder()
            .header("refreshToken", "rt-1")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        let token = RefreshToken::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(token.as_str(), "rt-1");

        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        let err = RefreshToken::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_json_body_ignores_content_type() {
        #[derive(Debug, serde::Deserialize)]
        struct Body {
            email: String,
        }

        let request = axum::http::Request::builder()
            .header("content-type", "text/plain")
            .body(axum::body::Body::from(r#"{"email":"a@b.com"}"#))
            .unwrap();
        let JsonBody(body) = JsonBody::<Body>::from_request(request, &()).await.unwrap();
        assert_eq!(body.email, "a@b.com");

        let request = axum::http::Request::builder()
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let err = JsonBody::<Body>::from_request(request, &()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
