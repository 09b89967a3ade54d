//! The shared HTTP client behind every resource client.
//!
//! [`Client`] owns the transport, default headers and retry policy. Resource
//! clients ([`CommonClient`], [`RealmsClient`], [`SandboxesClient`]) are cheap
//! views over it that only know how to build paths.

use crate::{
    error::Failure,
    path::ResourcePath,
    request::RequestDescriptor,
    resources::{CommonClient, RealmsClient, SandboxesClient},
    retry::RetryPolicy,
    transport::{RawResponse, ReqwestTransport, Transport},
    Error, Response, Result,
};
use http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// A client for the realm and sandbox management API.
///
/// Cloning is cheap and clones share the same connection pool. Every call
/// goes through the client's [`RetryPolicy`]: failures are retried with no
/// delay, then reported as [`Error::RequestFailed`].
///
/// # Examples
///
/// ```no_run
/// use sandbar::Client;
/// use serde_json::Value;
///
/// # async fn example() -> Result<(), sandbar::Error> {
/// let client = Client::builder()
///     .base_url("https://admin.example.com/api/v1")?
///     .build()?;
///
/// let realm = client.realms().get_realm::<Value>("bcxz").await?;
/// println!("Realm: {}", realm.data);
///
/// let sandboxes = client.sandboxes().get_sandboxes::<Value>(false).await?;
/// println!("Sandboxes: {}", sandboxes.data);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    default_headers: HeaderMap,
    retry_policy: RetryPolicy,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the retry policy applied to every call.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.inner.retry_policy
    }

    /// Client for the service metadata endpoints, rooted at `/`.
    pub fn common(&self) -> CommonClient {
        CommonClient::new(self.clone(), ResourcePath::root())
    }

    /// Client for realm endpoints, rooted at `/realms`.
    pub fn realms(&self) -> RealmsClient {
        RealmsClient::new(self.clone(), ResourcePath::new(RealmsClient::BASE_PATH))
    }

    /// Client for sandbox endpoints, rooted at `/sandboxes`.
    pub fn sandboxes(&self) -> SandboxesClient {
        SandboxesClient::new(self.clone(), ResourcePath::new(SandboxesClient::BASE_PATH))
    }

    /// Runs `thunk` under this client's retry policy.
    ///
    /// See [`RetryPolicy::execute`].
    pub async fn execute_with_policy<T, F, Fut>(&self, thunk: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, Failure>>,
    {
        self.inner.retry_policy.execute(thunk).await
    }

    /// Makes a typed HTTP request.
    ///
    /// The body is encoded once, default headers are merged in, and the
    /// request is sent under the retry policy. An empty response body decodes
    /// as JSON `null`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sandbar::{Client, RequestDescriptor};
    /// use http::Method;
    ///
    /// # async fn example() -> Result<(), sandbar::Error> {
    /// let client = Client::builder()
    ///     .base_url("https://admin.example.com/api/v1")?
    ///     .build()?;
    ///
    /// let request = RequestDescriptor::new(Method::GET, "/sandboxes")
    ///     .with_query_param("include_deleted", "true");
    ///
    /// let response = client.call::<(), serde_json::Value>(request, None).await?;
    /// println!("{}", response.data);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<Req, Res>(
        &self,
        mut request: RequestDescriptor,
        body: Option<&Req>,
    ) -> Result<Response<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let start_time = Instant::now();
        request.merge_default_headers(&self.inner.default_headers);

        let prepared = match body.map(serde_json::to_value).transpose() {
            Ok(value) => {
                request.body = value;
                Ok(request)
            }
            Err(e) => Err(e.to_string()),
        };
        let prepared = &prepared;

        let mut attempts = 0;
        self.execute_with_policy(|| {
            attempts += 1;
            self.attempt(prepared, attempts, start_time)
        })
        .await
    }

    /// Executes a single request attempt.
    async fn attempt<Res>(
        &self,
        prepared: &std::result::Result<RequestDescriptor, String>,
        attempt: usize,
        start_time: Instant,
    ) -> std::result::Result<Response<Res>, Failure>
    where
        Res: DeserializeOwned,
    {
        let request = prepared
            .as_ref()
            .map_err(|e| Failure::Encode(e.clone()))?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            attempt = attempt,
            "Executing HTTP request"
        );

        let raw = self.inner.transport.send(request).await?;
        parse_response(raw, start_time.elapsed(), attempt)
    }

    /// Makes a GET request to the specified path.
    pub async fn get<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let request = RequestDescriptor::new(Method::GET, path);
        self.call::<(), Res>(request, None).await
    }

    /// Makes a POST request to the specified path with a JSON body.
    pub async fn post<Req, Res>(&self, path: impl Into<String>, body: &Req) -> Result<Response<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let request = RequestDescriptor::new(Method::POST, path);
        self.call(request, Some(body)).await
    }

    /// Makes a PATCH request to the specified path with a JSON body.
    pub async fn patch<Req, Res>(
        &self,
        path: impl Into<String>,
        body: &Req,
    ) -> Result<Response<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let request = RequestDescriptor::new(Method::PATCH, path);
        self.call(request, Some(body)).await
    }

    /// Makes a DELETE request to the specified path.
    pub async fn delete<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let request = RequestDescriptor::new(Method::DELETE, path);
        self.call::<(), Res>(request, None).await
    }
}

/// Turns a raw response into a typed one, or the failure to retry on.
fn parse_response<Res>(
    raw: RawResponse,
    latency: Duration,
    attempts: usize,
) -> std::result::Result<Response<Res>, Failure>
where
    Res: DeserializeOwned,
{
    let status = raw.status;

    tracing::info!(
        status = status.as_u16(),
        latency_ms = latency.as_millis(),
        attempts = attempts,
        "Received HTTP response"
    );

    if !status.is_success() {
        return Err(Failure::Status {
            status,
            body: raw.body,
        });
    }

    let text = if raw.body.trim().is_empty() {
        "null"
    } else {
        raw.body.as_str()
    };

    match serde_json::from_str::<Res>(text) {
        Ok(data) => Ok(Response::new(
            data,
            raw.body,
            status,
            raw.headers,
            latency,
            attempts,
        )),
        Err(e) => Err(Failure::Decode {
            status,
            serde_error: e.to_string(),
            body: raw.body,
        }),
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// Every client sends `Content-Type: application/json` unless overridden.
///
/// # Examples
///
/// ```no_run
/// use sandbar::{ClientBuilder, RetryPolicy};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), sandbar::Error> {
/// let client = ClientBuilder::new()
///     .base_url("https://admin.example.com/api/v1")?
///     .timeout(Duration::from_secs(30))
///     .retry_policy(RetryPolicy::default())
///     .default_header("User-Agent", "sandbox-console/1.0")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    default_headers: HeaderMap,
    retry_policy: RetryPolicy,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            base_url: None,
            default_headers,
            retry_policy: RetryPolicy::default(),
            timeout: None,
            transport: None,
        }
    }

    /// Sets the base URL for all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the retry policy. Defaults to two retries.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Sets the per-request timeout of the default transport.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the default `reqwest` transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither a base URL nor a transport was provided,
    /// or if the HTTP client cannot be built.
    pub fn build(self) -> Result<Client> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let base_url = self.base_url.ok_or_else(|| {
                    Error::ConfigurationError("Base URL is required".to_string())
                })?;
                let mut transport = ReqwestTransport::new(base_url)?;
                if let Some(timeout) = self.timeout {
                    transport = transport.with_timeout(timeout);
                }
                Arc::new(transport)
            }
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                transport,
                default_headers: self.default_headers,
                retry_policy: self.retry_policy,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
