//! Profile and authentication routes, mounted under `/profile`.
//!
//! ```text
//! POST   /login            → Login        (client IP + user agent in the body)
//! DELETE /logout           → Logout       (refreshToken header → metadata)
//! POST   /register         → Register
//! DELETE /unregister       → Unregister   (refreshToken header → metadata)
//! GET    /users/{userId}   → GetUser
//! POST   /refresh          → Refresh      (refreshToken header → metadata)
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tonic::transport::Channel;

use crate::backend::{ProfileBackend, ProfileClient};
use crate::domain::profile as wire;
use crate::http::error::ApiError;
use crate::http::extract::{ClientSource, JsonBody, RefreshToken};
use crate::http::request::CallContext;
use crate::mapping::profile as mapping;
use crate::routing::RouteHandler;

#[derive(Clone)]
pub struct ProfileHandler {
    backend: Arc<dyn ProfileBackend>,
}

impl ProfileHandler {
    pub fn new(backend: Arc<dyn ProfileBackend>) -> Self {
        Self { backend }
    }
}

impl RouteHandler for ProfileHandler {
    fn setup_rpc(channel: Channel) -> Self {
        Self::new(Arc::new(ProfileClient::new(channel)))
    }

    fn setup_routes(&self) -> Router {
        Router::new()
            .route("/login", post(login))
            .route("/logout", delete(logout))
            .route("/register", post(register))
            .route("/unregister", delete(unregister))
            .route("/users/{userId}", get(get_user))
            .route("/refresh", post(refresh))
            .with_state(self.clone())
    }
}

async fn login(
    State(handler): State<ProfileHandler>,
    ctx: CallContext,
    source: ClientSource,
    JsonBody(body): JsonBody<wire::LoginRequest>,
) -> Result<Json<wire::LoginResponse>, ApiError> {
    tracing::info!(ip = %source.ip, user_agent = %source.user_agent, "Logging in");

    let message = mapping::login_to_rpc(body, mapping::source_data(source.ip, source.user_agent));
    let response = handler
        .backend
        .login(ctx.request(message))
        .await
        .map_err(|status| ApiError::from_rpc("Login failed", status))?
        .into_inner();

    mapping::login_from_rpc(response)
        .map(Json)
        .map_err(ApiError::internal)
}

async fn logout(
    State(handler): State<ProfileHandler>,
    ctx: CallContext,
    token: RefreshToken,
) -> Result<Json<wire::Empty>, ApiError> {
    tracing::info!("Logging out");

    handler
        .backend
        .logout(ctx.authorized((), &token)?)
        .await
        .map_err(|status| ApiError::from_rpc("Logout failed", status))?;

    Ok(Json(wire::Empty {}))
}

async fn register(
    State(handler): State<ProfileHandler>,
    ctx: CallContext,
    JsonBody(body): JsonBody<wire::RegisterRequest>,
) -> Result<Json<wire::RegisterResponse>, ApiError> {
    tracing::info!("Registering user");

    let message = mapping::register_to_rpc(body).map_err(ApiError::bad_request)?;
    let response = handler
        .backend
        .register(ctx.request(message))
        .await
        .map_err(|status| ApiError::from_rpc("Register failed", status))?
        .into_inner();

    mapping::register_from_rpc(response)
        .map(Json)
        .map_err(ApiError::internal)
}

async fn unregister(
    State(handler): State<ProfileHandler>,
    ctx: CallContext,
    token: RefreshToken,
) -> Result<Json<wire::Empty>, ApiError> {
    tracing::info!("Unregistering user");

    handler
        .backend
        .unregister(ctx.authorized((), &token)?)
        .await
        .map_err(|status| ApiError::from_rpc("Unregister failed", status))?;

    Ok(Json(wire::Empty {}))
}

async fn get_user(
    State(handler): State<ProfileHandler>,
    ctx: CallContext,
    Path(user_id): Path<String>,
) -> Result<Json<wire::UserResponse>, ApiError> {
    let user_id = mapping::parse_user_id(&user_id).map_err(ApiError::bad_request)?;
    tracing::info!(user_id = %user_id, "Fetching user");

    let response = handler
        .backend
        .get_user(ctx.request(mapping::user_request(user_id)))
        .await
        .map_err(|status| ApiError::from_rpc("GetUser failed", status))?
        .into_inner();

    mapping::user_from_rpc(response)
        .map(Json)
        .map_err(ApiError::internal)
}

async fn refresh(
    State(handler): State<ProfileHandler>,
    ctx: CallContext,
    source: ClientSource,
    token: RefreshToken,
) -> Result<Json<wire::TokenResponse>, ApiError> {
    tracing::info!(ip = %source.ip, "Refreshing tokens");

    let message = mapping::source_data(source.ip, source.user_agent);
    let response = handler
        .backend
        .refresh(ctx.authorized(message, &token)?)
        .await
        .map_err(|status| ApiError::from_rpc("Refresh failed", status))?
        .into_inner();

    Ok(Json(mapping::tokens_from_rpc(response)))
}
