//! Successful responses.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A decoded response body together with details of the exchange.
///
/// Dereferences to the decoded body, so `response.data` and `*response` are
/// interchangeable.
///
/// # Examples
///
/// ```no_run
/// use sandbar::Client;
///
/// # async fn example() -> Result<(), sandbar::Error> {
/// let client = Client::builder()
///     .base_url("https://admin.example.com/api/v1")?
///     .build()?;
///
/// let storage = client
///     .sandboxes()
///     .get_sandbox_storage::<serde_json::Value>("abc-123")
///     .await?;
///
/// println!("Storage: {}", storage.data);
/// println!("Took {:?} over {} attempt(s)", storage.latency, storage.attempts);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response body.
    pub data: T,

    /// The response body exactly as received.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from the first attempt until this response was decoded.
    pub latency: Duration,

    /// The attempt that produced this response, starting at `1`.
    pub attempts: usize,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
        attempts: usize,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
            attempts,
        }
    }

    /// Maps the decoded body, keeping the exchange details.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sandbar::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     serde_json::json!({"id": "abc-123"}),
    ///     r#"{"id":"abc-123"}"#.to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(20),
    ///     1,
    /// );
    ///
    /// let id = response.map(|body| body["id"].as_str().unwrap_or_default().to_string());
    /// assert_eq!(id.data, "abc-123");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
            attempts: self.attempts,
        }
    }

    /// Returns `true` if earlier attempts failed before this one succeeded.
    pub fn was_retried(&self) -> bool {
        self.attempts > 1
    }

    /// Returns a header value by name, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Consumes the response, returning the decoded body.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
