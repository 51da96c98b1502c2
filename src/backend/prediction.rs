//! Prediction service client.

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::rpc::prediction::{self as rpc, method};
use crate::rpc::unary;

/// Operations of `prediction_v1.PredictionService`.
#[async_trait]
pub trait PredictionBackend: Send + Sync + 'static {
    async fn predict(
        &self,
        request: Request<rpc::PredictRequest>,
    ) -> Result<Response<rpc::PredictResponse>, Status>;

    async fn get_images(
        &self,
        request: Request<rpc::ImagesRequest>,
    ) -> Result<Response<rpc::ImagesResponse>, Status>;
}

/// gRPC-backed [`PredictionBackend`].
#[derive(Debug, Clone)]
pub struct PredictionClient {
    channel: Channel,
}

impl PredictionClient {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl PredictionBackend for PredictionClient {
    async fn predict(
        &self,
        request: Request<rpc::PredictRequest>,
    ) -> Result<Response<rpc::PredictResponse>, Status> {
        unary(&self.channel, method::PREDICT, request).await
    }

    async fn get_images(
        &self,
        request: Request<rpc::ImagesRequest>,
    ) -> Result<Response<rpc::ImagesResponse>, Status> {
        unary(&self.channel, method::GET_IMAGES, request).await
    }
}
