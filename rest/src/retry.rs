//! Bounded fixed-interval retry of transient failures.

use std::time::Duration;

use tracing::warn;

use crate::error::RestError;

/// Retry policy for executing requests with automatic retries.
///
/// Only errors classified as retryable by [`RestError::is_retryable`] are
/// retried, at a fixed interval, up to the configured budget.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    interval: Duration,
}

impl RetryPolicy {
    /// Create a retry policy.
    #[must_use]
    pub const fn new(max_retries: u32, interval: Duration) -> Self {
        Self {
            max_retries,
            interval,
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Check whether an error should be retried at the given attempt.
    #[must_use]
    pub const fn should_retry(&self, error: &RestError, attempt: u32) -> bool {
        attempt < self.max_retries && error.is_retryable()
    }

    /// Execute an async operation, retrying transient failures.
    ///
    /// # Errors
    ///
    /// Returns the last error once the retry budget is exhausted or a
    /// non-retryable error occurs.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, RestError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, RestError>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    if !self.should_retry(&error, attempt) {
                        return Err(error);
                    }

                    attempt += 1;
                    warn!(attempt, error = %error, "retrying request");
                    tokio::time::sleep(self.interval).await;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}
