//! Listing feed routes, mounted under `/feed`.
//!
//! ```text
//! GET    /listings                     → ListListings
//! GET    /listings/search              → SearchListings
//! GET    /listings/{listingId}         → GetListing
//! POST   /listings                     → CreateListing
//! PUT    /listings/{listingId}         → UpdateListing (path id wins)
//! DELETE /listings/{listingId}         → DeleteListing
//! POST   /users/{userId}/favorites     → AddToFavorites
//! ```

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tonic::transport::Channel;

use crate::backend::{FeedBackend, FeedClient};
use crate::domain::feed as wire;
use crate::handlers::require_id;
use crate::http::error::ApiError;
use crate::http::extract::JsonBody;
use crate::http::request::CallContext;
use crate::mapping::feed as mapping;
use crate::mapping::profile::parse_user_id;
use crate::routing::RouteHandler;
use crate::rpc::feed as rpc;

#[derive(Clone)]
pub struct FeedHandler {
    backend: Arc<dyn FeedBackend>,
}

impl FeedHandler {
    pub fn new(backend: Arc<dyn FeedBackend>) -> Self {
        Self { backend }
    }
}

impl RouteHandler for FeedHandler {
    fn setup_rpc(channel: Channel) -> Self {
        Self::new(Arc::new(FeedClient::new(channel)))
    }

    fn setup_routes(&self) -> Router {
        Router::new()
            .route("/listings", get(list_listings).post(create_listing))
            .route("/listings/search", get(search_listings))
            .route(
                "/listings/{listingId}",
                get(get_listing).put(update_listing).delete(delete_listing),
            )
            .route("/users/{userId}/favorites", post(add_to_favorites))
            .with_state(self.clone())
    }
}

/// Raw list/search query; values are kept as text so bad numbers fall back
/// to defaults instead of rejecting the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub query: Option<String>,
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
}

impl ListingQuery {
    /// Collect the known keys from decoded query pairs. The first occurrence
    /// of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "query" => &mut params.query,
                "page_number" => &mut params.page_number,
                "page_size" => &mut params.page_size,
                "sort_by" => &mut params.sort_by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    fn page(&self) -> rpc::PageRequest {
        mapping::page_request(self.page_number.as_deref(), self.page_size.as_deref())
    }

    fn sort_by(&self) -> rpc::SortBy {
        mapping::sort_by(self.sort_by.as_deref())
    }
}

async fn list_listings(
    State(handler): State<FeedHandler>,
    ctx: CallContext,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<wire::ListingPage>, ApiError> {
    let params = ListingQuery::from_pairs(pairs);
    let page = params.page();
    let sort_by = params.sort_by();

    tracing::info!(
        page_number = page.page_number,
        page_size = page.page_size,
        sort_by = sort_by.as_str_name(),
        "Listing listings"
    );

    let response = handler
        .backend
        .list_listings(ctx.request(rpc::ListListingsRequest {
            page: Some(page),
            sort_by: sort_by as i32,
        }))
        .await
        .map_err(|status| ApiError::from_rpc("ListListings failed", status))?
        .into_inner();

    Ok(Json(mapping::listing_page_from_rpc(
        response.listings,
        response.page_metadata,
    )))
}

async fn search_listings(
    State(handler): State<FeedHandler>,
    ctx: CallContext,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<wire::ListingPage>, ApiError> {
    let params = ListingQuery::from_pairs(pairs);
    let page = params.page();
    let sort_by = params.sort_by();
    let query = params.query.unwrap_or_default();

    tracing::info!(
        query = %query,
        page_number = page.page_number,
        page_size = page.page_size,
        sort_by = sort_by.as_str_name(),
        "Searching listings"
    );

    let response = handler
        .backend
        .search_listings(ctx.request(rpc::SearchListingsRequest {
            query,
            page: Some(page),
            sort_by: sort_by as i32,
        }))
        .await
        .map_err(|status| ApiError::from_rpc("SearchListings failed", status))?
        .into_inner();

    Ok(Json(mapping::listing_page_from_rpc(
        response.listings,
        response.page_metadata,
    )))
}

async fn get_listing(
    State(handler): State<FeedHandler>,
    ctx: CallContext,
    Path(listing_id): Path<String>,
) -> Result<Json<wire::ListingEnvelope>, ApiError> {
    let listing_id = require_id(&listing_id, "listingId")?.to_string();
    tracing::info!(listing_id = %listing_id, "Fetching listing");

    let response = handler
        .backend
        .get_listing(ctx.request(rpc::GetListingRequest { listing_id }))
        .await
        .map_err(|status| ApiError::from_rpc("GetListing failed", status))?
        .into_inner();

    Ok(Json(wire::ListingEnvelope {
        listing: mapping::optional_listing_from_rpc(response.listing),
    }))
}

async fn create_listing(
    State(handler): State<FeedHandler>,
    ctx: CallContext,
    JsonBody(body): JsonBody<wire::ListingEnvelope>,
) -> Result<Json<wire::ListingEnvelope>, ApiError> {
    tracing::info!(make = %body.listing.make, model = %body.listing.model_name, "Creating listing");

    let response = handler
        .backend
        .create_listing(ctx.request(rpc::CreateListingRequest {
            listing: Some(mapping::listing_to_rpc(body.listing)),
        }))
        .await
        .map_err(|status| ApiError::from_rpc("CreateListing failed", status))?
        .into_inner();

    Ok(Json(wire::ListingEnvelope {
        listing: mapping::optional_listing_from_rpc(response.listing),
    }))
}

async fn update_listing(
    State(handler): State<FeedHandler>,
    ctx: CallContext,
    Path(listing_id): Path<String>,
    JsonBody(mut body): JsonBody<wire::ListingEnvelope>,
) -> Result<Json<wire::ListingEnvelope>, ApiError> {
    let listing_id = require_id(&listing_id, "listingId")?;

    if !body.listing.listing_id.is_empty() && body.listing.listing_id != listing_id {
        tracing::debug!(
            path_id = %listing_id,
            body_id = %body.listing.listing_id,
            "Body listing id overridden by path"
        );
    }
    body.listing.listing_id = listing_id.to_string();

    tracing::info!(listing_id = %listing_id, "Updating listing");

    let response = handler
        .backend
        .update_listing(ctx.request(rpc::UpdateListingRequest {
            listing: Some(mapping::listing_to_rpc(body.listing)),
        }))
        .await
        .map_err(|status| ApiError::from_rpc("UpdateListing failed", status))?
        .into_inner();

    Ok(Json(wire::ListingEnvelope {
        listing: mapping::optional_listing_from_rpc(response.listing),
    }))
}

async fn delete_listing(
    State(handler): State<FeedHandler>,
    ctx: CallContext,
    Path(listing_id): Path<String>,
) -> Result<Json<wire::SuccessResponse>, ApiError> {
    let listing_id = require_id(&listing_id, "listingId")?.to_string();
    tracing::info!(listing_id = %listing_id, "Deleting listing");

    let response = handler
        .backend
        .delete_listing(ctx.request(rpc::DeleteListingRequest { listing_id }))
        .await
        .map_err(|status| ApiError::from_rpc("DeleteListing failed", status))?
        .into_inner();

    Ok(Json(wire::SuccessResponse {
        success: response.success,
    }))
}

async fn add_to_favorites(
    State(handler): State<FeedHandler>,
    ctx: CallContext,
    Path(user_id): Path<String>,
    JsonBody(body): JsonBody<wire::AddToFavoritesRequest>,
) -> Result<Json<wire::SuccessResponse>, ApiError> {
    let user_id = parse_user_id(&user_id).map_err(ApiError::bad_request)?;
    tracing::info!(user_id = %user_id, listing_id = %body.listing_id, "Adding listing to favorites");

    let response = handler
        .backend
        .add_to_favorites(ctx.request(rpc::AddToFavoritesRequest {
            user_id: user_id.to_string(),
            listing_id: body.listing_id,
        }))
        .await
        .map_err(|status| ApiError::from_rpc("AddToFavorites failed", status))?
        .into_inner();

    Ok(Json(wire::SuccessResponse {
        success: response.success,
    }))
}
