//! Feed service client.

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::rpc::feed::{self as rpc, method};
use crate::rpc::unary;

/// Operations of `feed_v1.FeedService`.
#[async_trait]
pub trait FeedBackend: Send + Sync + 'static {
    async fn list_listings(
        &self,
        request: Request<rpc::ListListingsRequest>,
    ) -> Result<Response<rpc::ListListingsResponse>, Status>;

    async fn search_listings(
        &self,
        request: Request<rpc::SearchListingsRequest>,
    ) -> Result<Response<rpc::SearchListingsResponse>, Status>;

    async fn get_listing(
        &self,
        request: Request<rpc::GetListingRequest>,
    ) -> Result<Response<rpc::GetListingResponse>, Status>;

    async fn create_listing(
        &self,
        request: Request<rpc::CreateListingRequest>,
    ) -> Result<Response<rpc::CreateListingResponse>, Status>;

    async fn update_listing(
        &self,
        request: Request<rpc::UpdateListingRequest>,
    ) -> Result<Response<rpc::UpdateListingResponse>, Status>;

    async fn delete_listing(
        &self,
        request: Request<rpc::DeleteListingRequest>,
    ) -> Result<Response<rpc::DeleteListingResponse>, Status>;

    async fn add_to_favorites(
        &self,
        request: Request<rpc::AddToFavoritesRequest>,
    ) -> Result<Response<rpc::AddToFavoritesResponse>, Status>;
}

/// gRPC-backed [`FeedBackend`].
#[derive(Debug, Clone)]
pub struct FeedClient {
    channel: Channel,
}

impl FeedClient {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl FeedBackend for FeedClient {
    async fn list_listings(
        &self,
        request: Request<rpc::ListListingsRequest>,
    ) -> Result<Response<rpc::ListListingsResponse>, Status> {
        unary(&self.channel, method::LIST_LISTINGS, request).await
    }

    async fn search_listings(
        &self,
        request: Request<rpc::SearchListingsRequest>,
    ) -> Result<Response<rpc::SearchListingsResponse>, Status> {
        unary(&self.channel, method::SEARCH_LISTINGS, request).await
    }

    async fn get_listing(
        &self,
        request: Request<rpc::GetListingRequest>,
    ) -> Result<Response<rpc::GetListingResponse>, Status> {
        unary(&self.channel, method::GET_LISTING, request).await
    }

    async fn create_listing(
        &self,
        request: Request<rpc::CreateListingRequest>,
    ) -> Result<Response<rpc::CreateListingResponse>, Status> {
        unary(&self.channel, method::CREATE_LISTING, request).await
    }

    async fn update_listing(
        &self,
        request: Request<rpc::UpdateListingRequest>,
    ) -> Result<Response<rpc::UpdateListingResponse>, Status> {
        unary(&self.channel, method::UPDATE_LISTING, request).await
    }

    async fn delete_listing(
        &self,
        request: Request<rpc::DeleteListingRequest>,
    ) -> Result<Response<rpc::DeleteListingResponse>, Status> {
        unary(&self.channel, method::DELETE_LISTING, request).await
    }

    async fn add_to_favorites(
        &self,
        request: Request<rpc::AddToFavoritesRequest>,
    ) -> Result<Response<rpc::AddToFavoritesResponse>, Status> {
        unary(&self.channel, method::ADD_TO_FAVORITES, request).await
    }
}
