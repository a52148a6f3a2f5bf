//! Transport to the lookup server.
//!
//! The server works asynchronously: a lookup is registered with one call,
//! which returns a request id, and its outcome is fetched with repeated
//! status calls until the server has heard back from upstream.
//!
//! - [`HttpTransport`] talks to a real server over HTTP/JSON
//! - [`MockTransport`] serves scripted replies for tests

mod client;
mod convert;
mod error;
mod mock;
mod reply;
mod types;

use std::future::Future;

use crate::domain::{RequestId, StopCode};

pub use client::{HttpTransport, TransportConfig};
pub use error::TransportError;
pub use mock::MockTransport;
pub use reply::{CreateReply, StatusReply};

/// Request/response channel to the lookup server.
pub trait TransportClient {
    /// Register a new lookup for `stop_code`.
    fn create_request(
        &self,
        stop_code: &StopCode,
    ) -> impl Future<Output = Result<CreateReply, TransportError>> + Send;

    /// Ask how the lookup behind `request_id` is doing.
    fn get_status(
        &self,
        request_id: &RequestId,
    ) -> impl Future<Output = Result<StatusReply, TransportError>> + Send;
}
