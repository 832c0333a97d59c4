use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{BoxError, ClientError};
use crate::query::build_url;
use crate::transport::{HttpTransport, ReqwestTransport, TransportResponse};

/// GET-and-decode client bound to a single base URL.
///
/// `T` is the shape every successful response is decoded into. Use
/// `RequestClient<serde_json::Value>` to accept any JSON document.
pub struct RequestClient<T> {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    sink: Arc<dyn DiagnosticSink>,
    _result: PhantomData<fn() -> T>,
}

impl<T> RequestClient<T> {
    /// Creates a client for `base_url`, stored as given.
    pub fn new(base_url: impl Into<String>) -> Self {
        RequestClient {
            base_url: base_url.into(),
            transport: Arc::new(ReqwestTransport::new()),
            sink: Arc::new(TracingSink),
            _result: PhantomData,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn with_transport<H>(mut self, transport: H) -> Self
    where
        H: HttpTransport + 'static,
    {
        self.transport = Arc::new(transport);
        self
    }

    pub fn with_sink<S>(mut self, sink: S) -> Self
    where
        S: DiagnosticSink + 'static,
    {
        self.sink = Arc::new(sink);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `endpoint` and hands the parsed JSON to `decode`.
    ///
    /// Failures from `decode` surface as [`ClientError::Validation`].
    pub async fn fetch_with<I, K, V, U, E, F>(
        &self,
        endpoint: &str,
        params: I,
        decode: F,
    ) -> Result<U, ClientError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        F: FnOnce(Value) -> Result<U, E>,
        E: Into<BoxError>,
    {
        let url = build_url(&self.base_url, endpoint, params);
        let result = match self.request(&url).await {
            Ok(response) => serde_json::from_slice::<Value>(&response.body)
                .map_err(ClientError::from)
                .and_then(|value| decode(value).map_err(|e| ClientError::Validation(e.into()))),
            Err(err) => Err(err),
        };
        self.report(&url, result)
    }

    async fn request(&self, url: &str) -> Result<TransportResponse, ClientError> {
        debug!(target: "request_client", url = url, "sending GET request");

        let response = self
            .transport
            .get(url)
            .await
            .map_err(ClientError::Transport)?;

        if !response.is_success() {
            return Err(ClientError::HttpStatus(response.status));
        }

        Ok(response)
    }

    fn report<U>(&self, url: &str, result: Result<U, ClientError>) -> Result<U, ClientError> {
        if let Err(err) = &result {
            self.sink.request_failed(url, err);
        }
        result
    }
}

impl<T: DeserializeOwned> RequestClient<T> {
    /// Fetches `{base_url}/{endpoint}?{params}` and decodes the body as `T`.
    pub async fn fetch<I, K, V>(&self, endpoint: &str, params: I) -> Result<T, ClientError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = build_url(&self.base_url, endpoint, params);
        let result = match self.request(&url).await {
            Ok(response) => serde_json::from_slice::<T>(&response.body).map_err(ClientError::from),
            Err(err) => Err(err),
        };
        self.report(&url, result)
    }
}

impl<T> Clone for RequestClient<T> {
    fn clone(&self) -> Self {
        RequestClient {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
            sink: Arc::clone(&self.sink),
            _result: PhantomData,
        }
    }
}

impl<T> fmt::Debug for RequestClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
