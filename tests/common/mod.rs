//! Shared utilities for the route integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use tokio::net::TcpListener;
use tonic::{Code, Response, Status};
use tower::ServiceExt;

use car_gateway::backend::{FeedBackend, PredictionBackend, ProfileBackend};
use car_gateway::config::GatewayConfig;
use car_gateway::handlers::{mount, FeedHandler, PredictionHandler, ProfileHandler};
use car_gateway::http::X_REQUEST_ID;
use car_gateway::lifecycle::Shutdown;
use car_gateway::rpc::feed as feed_rpc;
use car_gateway::rpc::prediction as prediction_rpc;
use car_gateway::rpc::profile::{self as profile_rpc, REFRESH_TOKEN_METADATA};
use car_gateway::{GatewayServer, HandlerRegistry};

pub const USER_ID: &str = "6f1c2a9e-3b7d-4e58-9a10-2c4b8d7e5f01";
pub const ACCESS_TOKEN: &str = "access-1";
pub const REFRESH_TOKEN: &str = "refresh-1";
pub const CHART_PNG: [u8; 4] = [0x89, b'P', b'N', b'G'];

/// Call counter plus an optional injected failure, shared by every stub.
#[derive(Default)]
pub struct Script {
    calls: AtomicUsize,
    failure: Mutex<Option<(Code, String)>>,
    request_ids: Mutex<Vec<String>>,
    stall: Mutex<Option<Duration>>,
    abandoned: AtomicUsize,
}

/// Counts a call as abandoned if dropped before it is disarmed.
struct InFlight<'a> {
    abandoned: &'a AtomicUsize,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.abandoned.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl Script {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every following call fail with `code`.
    pub fn fail_with(&self, code: Code, message: &str) {
        *self.failure.lock().unwrap() = Some((code, message.to_string()));
    }

    pub fn request_ids(&self) -> Vec<String> {
        self.request_ids.lock().unwrap().clone()
    }

    /// Make stalling calls sleep for `delay` before answering.
    pub fn stall_for(&self, delay: Duration) {
        *self.stall.lock().unwrap() = Some(delay);
    }

    /// Calls whose future was dropped while stalled.
    pub fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }

    async fn stall(&self) {
        let delay = *self.stall.lock().unwrap();
        if let Some(delay) = delay {
            let mut in_flight = InFlight {
                abandoned: &self.abandoned,
                armed: true,
            };
            tokio::time::sleep(delay).await;
            in_flight.armed = false;
        }
    }

    fn enter<T>(&self, request: &tonic::Request<T>) -> Result<(), Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(id) = metadata(request, X_REQUEST_ID) {
            self.request_ids.lock().unwrap().push(id);
        }
        match &*self.failure.lock().unwrap() {
            Some((code, message)) => Err(Status::new(*code, message.clone())),
            None => Ok(()),
        }
    }
}

fn metadata<T>(request: &tonic::Request<T>, key: &str) -> Option<String> {
    request
        .metadata()
        .get(key)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn record<T: Clone>(slot: &Mutex<Option<T>>, value: &T) {
    *slot.lock().unwrap() = Some(value.clone());
}

fn last<T: Clone>(slot: &Mutex<Option<T>>) -> Option<T> {
    slot.lock().unwrap().clone()
}

// ---------------------------------------------------------------------------
// Profile

#[derive(Default)]
pub struct StubProfile {
    pub script: Script,
    login: Mutex<Option<profile_rpc::LoginRequest>>,
    register: Mutex<Option<profile_rpc::RegisterRequest>>,
    refresh: Mutex<Option<profile_rpc::SourceData>>,
    user: Mutex<Option<profile_rpc::UserRequest>>,
    tokens: Mutex<Vec<String>>,
}

impl StubProfile {
    pub fn last_login(&self) -> Option<profile_rpc::LoginRequest> {
        last(&self.login)
    }

    pub fn last_register(&self) -> Option<profile_rpc::RegisterRequest> {
        last(&self.register)
    }

    pub fn last_refresh(&self) -> Option<profile_rpc::SourceData> {
        last(&self.refresh)
    }

    pub fn last_user(&self) -> Option<profile_rpc::UserRequest> {
        last(&self.user)
    }

    /// Refresh tokens received as call metadata, in call order.
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }

    fn capture_token<T>(&self, request: &tonic::Request<T>) {
        if let Some(token) = metadata(request, REFRESH_TOKEN_METADATA) {
            self.tokens.lock().unwrap().push(token);
        }
    }
}

fn user_id() -> Option<profile_rpc::Uuid> {
    Some(profile_rpc::Uuid {
        value: USER_ID.to_string(),
    })
}

fn token_pair() -> profile_rpc::TokenPair {
    profile_rpc::TokenPair {
        access_token: ACCESS_TOKEN.to_string(),
        refresh_token: REFRESH_TOKEN.to_string(),
    }
}

#[async_trait]
impl ProfileBackend for StubProfile {
    async fn login(
        &self,
        request: tonic::Request<profile_rpc::LoginRequest>,
    ) -> Result<Response<profile_rpc::LoginResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.login, request.get_ref());
        Ok(Response::new(profile_rpc::LoginResponse {
            user_id: user_id(),
            tokens: Some(token_pair()),
        }))
    }

    async fn logout(&self, request: tonic::Request<()>) -> Result<Response<()>, Status> {
        self.script.enter(&request)?;
        self.capture_token(&request);
        Ok(Response::new(()))
    }

    async fn register(
        &self,
        request: tonic::Request<profile_rpc::RegisterRequest>,
    ) -> Result<Response<profile_rpc::RegisterResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.register, request.get_ref());
        Ok(Response::new(profile_rpc::RegisterResponse { user_id: user_id() }))
    }

    async fn unregister(&self, request: tonic::Request<()>) -> Result<Response<()>, Status> {
        self.script.enter(&request)?;
        self.capture_token(&request);
        Ok(Response::new(()))
    }

    async fn get_user(
        &self,
        request: tonic::Request<profile_rpc::UserRequest>,
    ) -> Result<Response<profile_rpc::UserResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.user, request.get_ref());
        Ok(Response::new(profile_rpc::UserResponse {
            user_id: user_id(),
            fullname: "A B".to_string(),
            email: "a@b.com".to_string(),
            phone: "+1".to_string(),
            birthdate: 631_152_000,
            registerdate: 1_700_000_000,
        }))
    }

    async fn refresh(
        &self,
        request: tonic::Request<profile_rpc::SourceData>,
    ) -> Result<Response<profile_rpc::TokenPair>, Status> {
        self.script.enter(&request)?;
        self.capture_token(&request);
        record(&self.refresh, request.get_ref());
        Ok(Response::new(token_pair()))
    }
}

// ---------------------------------------------------------------------------
// Feed

#[derive(Default)]
pub struct StubFeed {
    pub script: Script,
    list: Mutex<Option<feed_rpc::ListListingsRequest>>,
    search: Mutex<Option<feed_rpc::SearchListingsRequest>>,
    get: Mutex<Option<feed_rpc::GetListingRequest>>,
    create: Mutex<Option<feed_rpc::CreateListingRequest>>,
    update: Mutex<Option<feed_rpc::UpdateListingRequest>>,
    delete: Mutex<Option<feed_rpc::DeleteListingRequest>>,
    favorite: Mutex<Option<feed_rpc::AddToFavoritesRequest>>,
}

impl StubFeed {
    pub fn last_list(&self) -> Option<feed_rpc::ListListingsRequest> {
        last(&self.list)
    }

    pub fn last_search(&self) -> Option<feed_rpc::SearchListingsRequest> {
        last(&self.search)
    }

    pub fn last_get(&self) -> Option<feed_rpc::GetListingRequest> {
        last(&self.get)
    }

    pub fn last_create(&self) -> Option<feed_rpc::CreateListingRequest> {
        last(&self.create)
    }

    pub fn last_update(&self) -> Option<feed_rpc::UpdateListingRequest> {
        last(&self.update)
    }

    pub fn last_delete(&self) -> Option<feed_rpc::DeleteListingRequest> {
        last(&self.delete)
    }

    pub fn last_favorite(&self) -> Option<feed_rpc::AddToFavoritesRequest> {
        last(&self.favorite)
    }
}

pub fn sample_listing(listing_id: &str) -> feed_rpc::CarListing {
    feed_rpc::CarListing {
        listing_id: listing_id.to_string(),
        make: "Subaru".to_string(),
        model_name: "Outback".to_string(),
        year: 2019,
        price: 18_450.5,
        tags: vec!["low-mileage".to_string()],
        ..Default::default()
    }
}

fn page_metadata(page: Option<feed_rpc::PageRequest>) -> Option<feed_rpc::PageResponseMetadata> {
    Some(feed_rpc::PageResponseMetadata {
        total_items: 1,
        total_pages: 1,
        current_page: page.map(|p| p.page_number).unwrap_or_default(),
    })
}

#[async_trait]
impl FeedBackend for StubFeed {
    async fn list_listings(
        &self,
        request: tonic::Request<feed_rpc::ListListingsRequest>,
    ) -> Result<Response<feed_rpc::ListListingsResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.list, request.get_ref());
        self.script.stall().await;
        Ok(Response::new(feed_rpc::ListListingsResponse {
            listings: vec![sample_listing("lst-1")],
            page_metadata: page_metadata(request.get_ref().page),
        }))
    }

    async fn search_listings(
        &self,
        request: tonic::Request<feed_rpc::SearchListingsRequest>,
    ) -> Result<Response<feed_rpc::SearchListingsResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.search, request.get_ref());
        Ok(Response::new(feed_rpc::SearchListingsResponse {
            listings: vec![sample_listing("lst-2")],
            page_metadata: page_metadata(request.get_ref().page),
        }))
    }

    async fn get_listing(
        &self,
        request: tonic::Request<feed_rpc::GetListingRequest>,
    ) -> Result<Response<feed_rpc::GetListingResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.get, request.get_ref());
        Ok(Response::new(feed_rpc::GetListingResponse {
            listing: Some(sample_listing(&request.get_ref().listing_id)),
        }))
    }

    async fn create_listing(
        &self,
        request: tonic::Request<feed_rpc::CreateListingRequest>,
    ) -> Result<Response<feed_rpc::CreateListingResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.create, request.get_ref());
        let mut listing = request.into_inner().listing.unwrap_or_default();
        listing.listing_id = "lst-new".to_string();
        Ok(Response::new(feed_rpc::CreateListingResponse {
            listing: Some(listing),
        }))
    }

    async fn update_listing(
        &self,
        request: tonic::Request<feed_rpc::UpdateListingRequest>,
    ) -> Result<Response<feed_rpc::UpdateListingResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.update, request.get_ref());
        Ok(Response::new(feed_rpc::UpdateListingResponse {
            listing: request.into_inner().listing,
        }))
    }

    async fn delete_listing(
        &self,
        request: tonic::Request<feed_rpc::DeleteListingRequest>,
    ) -> Result<Response<feed_rpc::DeleteListingResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.delete, request.get_ref());
        Ok(Response::new(feed_rpc::DeleteListingResponse { success: true }))
    }

    async fn add_to_favorites(
        &self,
        request: tonic::Request<feed_rpc::AddToFavoritesRequest>,
    ) -> Result<Response<feed_rpc::AddToFavoritesResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.favorite, request.get_ref());
        Ok(Response::new(feed_rpc::AddToFavoritesResponse { success: true }))
    }
}

// ---------------------------------------------------------------------------
// Prediction

#[derive(Default)]
pub struct StubPrediction {
    pub script: Script,
    predict: Mutex<Option<prediction_rpc::PredictRequest>>,
    images: Mutex<Option<prediction_rpc::ImagesRequest>>,
}

impl StubPrediction {
    pub fn last_predict(&self) -> Option<prediction_rpc::PredictRequest> {
        last(&self.predict)
    }

    pub fn last_images(&self) -> Option<prediction_rpc::ImagesRequest> {
        last(&self.images)
    }
}

#[async_trait]
impl PredictionBackend for StubPrediction {
    async fn predict(
        &self,
        request: tonic::Request<prediction_rpc::PredictRequest>,
    ) -> Result<Response<prediction_rpc::PredictResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.predict, request.get_ref());
        Ok(Response::new(prediction_rpc::PredictResponse {
            price: 31_500,
            sell_count: 12,
            photo_urls: vec!["https://img.example/1.jpg".to_string()],
            graph_png: CHART_PNG.to_vec(),
        }))
    }

    async fn get_images(
        &self,
        request: tonic::Request<prediction_rpc::ImagesRequest>,
    ) -> Result<Response<prediction_rpc::ImagesResponse>, Status> {
        self.script.enter(&request)?;
        record(&self.images, request.get_ref());
        let req = request.get_ref();
        Ok(Response::new(prediction_rpc::ImagesResponse {
            photo_urls: vec![format!(
                "https://img.example/{}/{}/{}.jpg",
                req.make, req.model, req.year
            )],
        }))
    }
}

// ---------------------------------------------------------------------------
// Gateway

/// The three stub backends behind one gateway.
#[derive(Clone, Default)]
pub struct Stubs {
    pub profile: Arc<StubProfile>,
    pub feed: Arc<StubFeed>,
    pub prediction: Arc<StubPrediction>,
}

impl Stubs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> HandlerRegistry {
        HandlerRegistry::builder()
            .register(
                mount::PROFILE.0,
                mount::PROFILE.1,
                ProfileHandler::new(self.profile.clone()),
            )
            .register(mount::FEED.0, mount::FEED.1, FeedHandler::new(self.feed.clone()))
            .register(
                mount::PREDICTION.0,
                mount::PREDICTION.1,
                PredictionHandler::new(self.prediction.clone()),
            )
            .build()
    }

    /// Fully layered gateway router over the stubs.
    pub fn router(&self) -> Router {
        self.router_with(GatewayConfig::default())
    }

    pub fn router_with(&self, config: GatewayConfig) -> Router {
        GatewayServer::new(config, &self.registry()).router()
    }

    /// Serve the gateway on an ephemeral port until the returned handle triggers.
    pub async fn spawn(&self) -> (SocketAddr, Shutdown, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut config = GatewayConfig::default();
        config.listener.bind_address = addr.to_string();
        let server = GatewayServer::new(config, &self.registry());

        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();
        let handle = tokio::spawn(async move {
            server.run(listener, rx).await.unwrap();
        });

        (addr, shutdown, handle)
    }
}

/// Captured response.
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Reply {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or_else(|e| panic!("not JSON ({e}): {}", self.body))
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> Reply {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    Reply {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap()
}

pub fn json(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
