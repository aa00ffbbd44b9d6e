//! Ready-made `reqwest` transports.
//!
//! Plain [`Transport`]/[`BlockingTransport`] implementations with no special
//! standing; callers may substitute anything that round-trips JSON.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;

use super::{BlockingTransport, Transport, TransportError};
use crate::endpoint::Endpoint;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async HTTP transport over a pooled [`reqwest::Client`].
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client builder uses valid static config");
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        endpoint: &Endpoint,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError> {
        let mut builder = self
            .client
            .post(endpoint.url())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some((user, pass)) = endpoint.auth() {
            builder = builder.basic_auth(user, Some(pass));
        }

        let response = builder.send().await.map_err(TransportError::new)?;
        // The wallet reports RPC errors in a JSON body even on non-2xx
        // statuses, so the status only matters when the body is not JSON.
        let status = response.status();
        let text = response.text().await.map_err(TransportError::new)?;
        serde_json::from_str(&text)
            .map_err(|e| TransportError::new(format!("HTTP {status}: body is not JSON: {e}")))
    }
}

/// Blocking HTTP transport over [`reqwest::blocking::Client`].
///
/// Must not be driven from inside an async runtime; that is what
/// [`HttpTransport`] is for.
pub struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
}

impl BlockingHttpTransport {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client builder uses valid static config");
        Self { client }
    }
}

impl Default for BlockingHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockingTransport for BlockingHttpTransport {
    fn post(
        &self,
        endpoint: &Endpoint,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError> {
        let mut builder = self
            .client
            .post(endpoint.url())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some((user, pass)) = endpoint.auth() {
            builder = builder.basic_auth(user, Some(pass));
        }

        let response = builder.send().map_err(TransportError::new)?;
        let status = response.status();
        let text = response.text().map_err(TransportError::new)?;
        serde_json::from_str(&text)
            .map_err(|e| TransportError::new(format!("HTTP {status}: body is not JSON: {e}")))
    }
}
