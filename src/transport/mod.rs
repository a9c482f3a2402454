//! Network boundary.
//!
//! Everything above this module talks to the API through [`Dispatcher`]:
//! one descriptor in, one decoded response (or a typed error) out. The
//! batch core never sees reqwest, so tests can swap in an in-process mock.

mod http;

pub use http::HttpTransport;

use crate::batch::RequestDescriptor;
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A response that made it back with a 2xx status.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResponse {
    pub status: u16,
    /// Decoded JSON body; `Value::Null` for an empty body.
    pub body: Value,
}

impl DispatchResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }
}

/// Performs exactly one network call per descriptor.
///
/// Implementations attach credentials and enforce their own per-call
/// timeout. Non-2xx responses are reported as errors.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: &RequestDescriptor) -> Result<DispatchResponse>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Transport error: {0}")]
    Other(String),
}
