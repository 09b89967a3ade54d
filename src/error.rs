//! Error types for realm and sandbox API calls.
//!
//! Two layers live here. [`Failure`] describes why a single attempt failed and
//! is only ever used for diagnostics. [`Error`] is what callers see: once the
//! retry policy gives up, every failure collapses into
//! [`Error::RequestFailed`], which carries no detail about the root cause.

use http::StatusCode;

/// The error type returned to callers.
///
/// Request-time failures are deliberately opaque. Configuration variants can
/// only occur while building a [`Client`](crate::Client).
///
/// # Examples
///
/// ```no_run
/// use sandbar::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .base_url("https://admin.example.com/api/v1")?
///     .build()?;
///
/// match client.sandboxes().get_sandbox::<serde_json::Value>("abc-123").await {
///     Ok(response) => println!("Sandbox: {}", response.data),
///     Err(Error::RequestFailed) => eprintln!("{}", Error::RequestFailed),
///     Err(e) => eprintln!("Unexpected error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request failed on every attempt.
    ///
    /// The underlying cause has already been logged and is not exposed here.
    #[error("Something bad happened; please try again later.")]
    RequestFailed,

    /// Invalid configuration was provided to the client builder.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An invalid base URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if this is the normalized request failure.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Error::RequestFailed)
    }
}

/// A failure raised by a [`Transport`](crate::transport::Transport)
/// before any HTTP response was obtained.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// A network-level error (connection refused, DNS lookup failed, etc.).
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The transport gave up waiting for a response.
    #[error("Request timed out")]
    Timeout,

    /// An error raised by a custom transport implementation.
    #[error("Transport error: {0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Network(error)
        }
    }
}

/// Why a single request attempt failed.
///
/// Every variant is retried identically; the distinction only decides how the
/// terminal failure is logged.
#[derive(thiserror::Error, Debug)]
pub enum Failure {
    /// The transport failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error {status}: {body}")]
    Status {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        body: String,
    },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    Decode {
        /// The HTTP status code
        status: StatusCode,
        /// The serde error message
        serde_error: String,
        /// The raw response body that failed to deserialize
        body: String,
    },

    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl Failure {
    /// Returns `true` for failures that happened on our side of the wire.
    pub fn is_client_side(&self) -> bool {
        !matches!(self, Failure::Status { .. })
    }

    /// Returns the HTTP status code if a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Failure::Status { status, .. } | Failure::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Emits the diagnostic for a request that exhausted its attempts.
    pub(crate) fn report(&self, attempts: usize) {
        if self.is_client_side() {
            tracing::error!(
                error = %self,
                attempts = attempts,
                "Client-side error occurred"
            );
        } else if let Failure::Status { status, body } = self {
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                attempts = attempts,
                "Backend returned an error status"
            );
        }
    }
}

/// A specialized `Result` type for realm and sandbox API calls.
pub type Result<T> = std::result::Result<T, Error>;
