//! The network boundary.
//!
//! A [`Transport`] turns a [`RequestDescriptor`] into a [`RawResponse`]. It
//! reports any HTTP status as a response; only failures to obtain a response
//! at all are errors. Connection pooling and timeouts belong here, not in the
//! retry policy.

use crate::{error::TransportError, request::RequestDescriptor, Error, Result};
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use std::time::Duration;
use url::Url;

/// A response as received from the wire, before any decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The response body as text.
    pub body: String,
}

impl RawResponse {
    /// Creates a response with no headers.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations must be safe to share between concurrent calls.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use http::StatusCode;
/// use sandbar::transport::{RawResponse, Transport};
/// use sandbar::{RequestDescriptor, TransportError};
///
/// struct Canned;
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn send(&self, _request: &RequestDescriptor) -> Result<RawResponse, TransportError> {
///         Ok(RawResponse::new(StatusCode::OK, r#"{"version":"1.0"}"#))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and waits for the response.
    async fn send(
        &self,
        request: &RequestDescriptor,
    ) -> std::result::Result<RawResponse, TransportError>;
}

/// The default [`Transport`], backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Creates a transport that resolves request paths against `base_url`.
    ///
    /// A path on the base URL (`https://host/api/v1`) is kept as a prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: Url) -> Result<Self> {
        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http_client,
            base_url,
            timeout: None,
        })
    }

    /// Sets a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the full URL for a request.
    pub fn url_for(&self, request: &RequestDescriptor) -> Url {
        let mut url = self.base_url.clone();
        let prefix = self.base_url.path().trim_end_matches('/');
        url.set_path(&format!("{}{}", prefix, request.path));

        for (key, value) in &request.query_params {
            url.query_pairs_mut().append_pair(key, value);
        }

        url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: &RequestDescriptor,
    ) -> std::result::Result<RawResponse, TransportError> {
        let url = self.url_for(request);

        tracing::debug!(
            method = %request.method,
            url = %url,
            "Sending HTTP request"
        );

        let mut builder = self.http_client.request(request.method.clone(), url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
