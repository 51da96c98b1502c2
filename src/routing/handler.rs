//! Route handler contract.

use axum::Router;
use tonic::transport::Channel;

/// A group of HTTP routes backed by one RPC service.
///
/// Implementors are cheap to clone; each route closure gets its own copy as
/// router state.
pub trait RouteHandler: Send + Sync + 'static {
    /// Build the handler around an established channel to its backend.
    fn setup_rpc(channel: Channel) -> Self
    where
        Self: Sized;

    /// Routes relative to the handler's mount prefix.
    fn setup_routes(&self) -> Router;
}
