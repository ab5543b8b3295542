//! Generic retry-with-backoff combinator.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Attempts an operation up to `max_attempts` times, sleeping
/// `base_delay * 2^(n-1)` after the n-th failure. Errors the predicate
/// rejects are returned immediately.
pub struct RetryPolicy<E> {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub retry_predicate: fn(&E) -> bool,
}

impl<E> Clone for RetryPolicy<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for RetryPolicy<E> {}

impl<E> std::fmt::Debug for RetryPolicy<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("base_delay", &self.base_delay)
            .finish()
    }
}

impl<E> RetryPolicy<E> {
    pub fn new(max_attempts: u32, base_delay: Duration, retry_predicate: fn(&E) -> bool) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            retry_predicate,
        }
    }

    /// Delay slept after the given (1-based) failed attempt.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1u32 << exponent)
    }
}

pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy<E>, label: &str, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts && (policy.retry_predicate)(&e) => {
                let delay = policy.delay_after(attempt);
                warn!(
                    "{label} attempt {attempt}/{max_attempts} failed ({e}), retrying after {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
