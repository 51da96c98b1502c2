//! Price prediction routes, mounted under `/prediction`.
//!
//! ```text
//! POST /                              → Predict    (chart returned base64-encoded)
//! GET  /images/{make}/{model}/{year}  → GetImages
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tonic::transport::Channel;

use crate::backend::{PredictionBackend, PredictionClient};
use crate::domain::prediction as wire;
use crate::handlers::require_id;
use crate::http::error::ApiError;
use crate::http::extract::JsonBody;
use crate::http::request::CallContext;
use crate::mapping::prediction as mapping;
use crate::routing::RouteHandler;

#[derive(Clone)]
pub struct PredictionHandler {
    backend: Arc<dyn PredictionBackend>,
}

impl PredictionHandler {
    pub fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        Self { backend }
    }
}

impl RouteHandler for PredictionHandler {
    fn setup_rpc(channel: Channel) -> Self {
        Self::new(Arc::new(PredictionClient::new(channel)))
    }

    fn setup_routes(&self) -> Router {
        Router::new()
            .route("/", post(predict))
            .route("/images/{make}/{model}/{year}", get(get_images))
            .with_state(self.clone())
    }
}

async fn predict(
    State(handler): State<PredictionHandler>,
    ctx: CallContext,
    JsonBody(body): JsonBody<wire::PredictionRequest>,
) -> Result<Json<wire::PredictionResponse>, ApiError> {
    tracing::info!(
        make = %body.make,
        model = %body.model,
        year = body.year,
        "Predicting price"
    );

    let response = handler
        .backend
        .predict(ctx.request(mapping::predict_to_rpc(body)))
        .await
        .map_err(|status| ApiError::from_rpc("Predict failed", status))?
        .into_inner();

    tracing::debug!(
        price = response.price,
        chart_bytes = response.graph_png.len(),
        "Prediction received"
    );

    Ok(Json(mapping::predict_from_rpc(response)))
}

async fn get_images(
    State(handler): State<PredictionHandler>,
    ctx: CallContext,
    Path((make, model, year)): Path<(String, String, String)>,
) -> Result<Json<wire::ImagesResponse>, ApiError> {
    let make = require_id(&make, "make")?.to_string();
    let model = require_id(&model, "model")?.to_string();
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("year '{}' is not an integer", year)))?;

    tracing::info!(make = %make, model = %model, year, "Fetching reference images");

    let response = handler
        .backend
        .get_images(ctx.request(mapping::images_request(make, model, year)))
        .await
        .map_err(|status| ApiError::from_rpc("GetImages failed", status))?
        .into_inner();

    Ok(Json(mapping::images_from_rpc(response)))
}
