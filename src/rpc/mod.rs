//! Backend RPC contracts.
//!
//! Message types and method paths for the profile, feed and prediction
//! services. The modules mirror what `prost-build` emits for the shared
//! `.proto` contracts and are kept in sync with them by hand, so the crate
//! builds without `protoc`.
//!
//! # Data Flow
//! ```text
//! handler → mapping (wire → rpc message)
//!         → backend::<Domain>Client
//!         → unary(channel, path, request)   (tonic::client::Grpc + ProstCodec)
//!         → rpc message → mapping (rpc → wire)
//! ```

pub mod feed;
pub mod prediction;
pub mod profile;

use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};

/// Perform one unary call on `channel`.
///
/// A channel that is not ready yields a `Status` carrying the transport error
/// as its source, which the error translator reports as a non-RPC failure.
pub(crate) async fn unary<M1, M2>(
    channel: &Channel,
    path: &'static str,
    request: Request<M1>,
) -> Result<Response<M2>, Status>
where
    M1: prost::Message + Send + Sync + 'static,
    M2: prost::Message + Default + Send + Sync + 'static,
{
    let mut grpc = Grpc::new(channel.clone());
    grpc.ready()
        .await
        .map_err(|e| Status::from_error(Box::new(e)))?;

    grpc.unary(request, PathAndQuery::from_static(path), ProstCodec::default())
        .await
}
