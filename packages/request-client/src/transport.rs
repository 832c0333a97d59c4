//! Network seam for the request client.
//!
//! The client only needs "GET this URL and hand me the status and the whole
//! body", which is what [`HttpTransport`] models. [`ReqwestTransport`] is the
//! production implementation; tests substitute their own.

use async_trait::async_trait;

use crate::error::BoxError;

/// Fully buffered HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// Numeric HTTP status code (e.g. `200`, `404`).
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for statuses in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a single GET request to `url`.
    ///
    /// Errors are reserved for failures where no response was received; a
    /// non-success status is still `Ok`, and its body may be left empty.
    async fn get(&self, url: &str) -> Result<TransportResponse, BoxError>;
}

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, BoxError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        // Failure bodies are discarded unread, so a broken one cannot mask the status.
        if !response.status().is_success() {
            return Ok(TransportResponse::new(status, Vec::new()));
        }

        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
