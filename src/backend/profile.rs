//! Profile service client.

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::rpc::profile::{self as rpc, method};
use crate::rpc::unary;

/// Operations of `profile_v1.ProfileService`.
#[async_trait]
pub trait ProfileBackend: Send + Sync + 'static {
    async fn login(
        &self,
        request: Request<rpc::LoginRequest>,
    ) -> Result<Response<rpc::LoginResponse>, Status>;

    async fn logout(&self, request: Request<()>) -> Result<Response<()>, Status>;

    async fn register(
        &self,
        request: Request<rpc::RegisterRequest>,
    ) -> Result<Response<rpc::RegisterResponse>, Status>;

    async fn unregister(&self, request: Request<()>) -> Result<Response<()>, Status>;

    async fn get_user(
        &self,
        request: Request<rpc::UserRequest>,
    ) -> Result<Response<rpc::UserResponse>, Status>;

    async fn refresh(
        &self,
        request: Request<rpc::SourceData>,
    ) -> Result<Response<rpc::TokenPair>, Status>;
}

/// gRPC-backed [`ProfileBackend`].
#[derive(Debug, Clone)]
pub struct ProfileClient {
    channel: Channel,
}

impl ProfileClient {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl ProfileBackend for ProfileClient {
    async fn login(
        &self,
        request: Request<rpc::LoginRequest>,
    ) -> Result<Response<rpc::LoginResponse>, Status> {
        unary(&self.channel, method::LOGIN, request).await
    }

    async fn logout(&self, request: Request<()>) -> Result<Response<()>, Status> {
        unary(&self.channel, method::LOGOUT, request).await
    }

    async fn register(
        &self,
        request: Request<rpc::RegisterRequest>,
    ) -> Result<Response<rpc::RegisterResponse>, Status> {
        unary(&self.channel, method::REGISTER, request).await
    }

    async fn unregister(&self, request: Request<()>) -> Result<Response<()>, Status> {
        unary(&self.channel, method::UNREGISTER, request).await
    }

    async fn get_user(
        &self,
        request: Request<rpc::UserRequest>,
    ) -> Result<Response<rpc::UserResponse>, Status> {
        unary(&self.channel, method::GET_USER, request).await
    }

    async fn refresh(
        &self,
        request: Request<rpc::SourceData>,
    ) -> Result<Response<rpc::TokenPair>, Status> {
        unary(&self.channel, method::REFRESH, request).await
    }
}
