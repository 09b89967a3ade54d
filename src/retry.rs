//! The request policy applied to every outbound call.
//!
//! A failed attempt is re-run immediately, regardless of what went wrong: a
//! 404 is retried exactly like a dropped connection. Once the attempts are
//! used up the failure is logged and replaced by [`Error::RequestFailed`].

use crate::{error::Failure, Error, Result};
use std::future::Future;

/// Number of additional attempts made after the first one fails.
pub const DEFAULT_MAX_RETRIES: usize = 2;

/// Bounded, delay-free retry with error normalization.
///
/// # Examples
///
/// ```
/// use sandbar::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_retries(), 2);
/// assert_eq!(policy.max_attempts(), 3);
///
/// let single_shot = RetryPolicy::none();
/// assert_eq!(single_shot.max_attempts(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: usize,
}

impl RetryPolicy {
    /// Creates a policy that retries up to `max_retries` times.
    pub fn new(max_retries: usize) -> Self {
        Self { max_retries }
    }

    /// Creates a policy that never retries.
    pub fn none() -> Self {
        Self::new(0)
    }

    /// Returns the number of retries after the first attempt.
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Returns the total number of attempts, including the first.
    pub fn max_attempts(&self) -> usize {
        self.max_retries.saturating_add(1)
    }

    /// Runs `thunk` until it succeeds or the attempts are exhausted.
    ///
    /// The thunk is re-invoked with no delay between attempts. On success the
    /// value is returned as-is and the thunk is not called again. When every
    /// attempt fails, the last [`Failure`] is logged and discarded and
    /// [`Error::RequestFailed`] is returned instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use sandbar::{Error, Failure, RetryPolicy};
    /// use http::StatusCode;
    ///
    /// # async fn example() {
    /// let result: Result<(), Error> = RetryPolicy::default()
    ///     .execute(|| async {
    ///         Err(Failure::Status {
    ///             status: StatusCode::SERVICE_UNAVAILABLE,
    ///             body: "down".to_string(),
    ///         })
    ///     })
    ///     .await;
    ///
    /// assert!(matches!(result, Err(Error::RequestFailed)));
    /// # }
    /// ```
    pub async fn execute<T, F, Fut>(&self, mut thunk: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, Failure>>,
    {
        let max_attempts = self.max_attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;

            match thunk().await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::debug!(attempt = attempt, "Request succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(failure) => {
                    tracing::warn!(
                        error = %failure,
                        attempt = attempt,
                        max_attempts = max_attempts,
                        "Request failed"
                    );

                    if attempt >= max_attempts {
                        failure.report(attempt);
                        return Err(Error::RequestFailed);
                    }
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES)
    }
}
