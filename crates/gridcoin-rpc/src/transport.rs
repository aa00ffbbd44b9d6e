//! The injected transport seam.
//!
//! The clients own none of the network. Each call hands one serialized
//! request body to a caller-supplied transport and interprets whatever comes
//! back; connections, timeouts, retries, and cancellation all live behind
//! this seam. [`Transport`] is the async shape, [`BlockingTransport`] the
//! direct-return one. Ready-made `reqwest` implementations of both live in
//! [`http`] for callers who do not bring their own.

pub mod http;

use async_trait::async_trait;

use crate::endpoint::Endpoint;

pub use http::{BlockingHttpTransport, HttpTransport};

/// Failure below the protocol layer: connection refused, timeout, cancelled
/// request, or a body that was not JSON.
///
/// Wraps whatever error the underlying transport produced, so implementations
/// built on any HTTP library can surface their native failures. Transport
/// failures are never wrapped in the wallet's error taxonomy.
#[derive(Debug, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// Asynchronous transport: POST one JSON body, return one JSON body.
///
/// Implementations must round-trip JSON; a response that cannot be decoded
/// as JSON is the transport's failure, not a protocol-level one.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Post `body` to `endpoint` and return the decoded response body.
    async fn post(
        &self,
        endpoint: &Endpoint,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError>;
}

/// Direct-return counterpart of [`Transport`] for callers without an async
/// runtime. Same contract, no suspension.
pub trait BlockingTransport: Send + Sync {
    /// Post `body` to `endpoint` and return the decoded response body.
    fn post(
        &self,
        endpoint: &Endpoint,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError>;
}
