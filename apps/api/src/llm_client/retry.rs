//! Bounded, fixed-delay retry around a single fallible async operation.
//!
//! No jitter and no backoff growth: the delay between attempts is constant.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of executions, including the first. Values below 1 behave as 1.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: DEFAULT_DELAY,
        }
    }
}

/// Runs `operation` until it succeeds or `policy.max_attempts` executions have failed.
/// Sleeps `policy.delay` between attempts; the last error is returned unchanged.
pub async fn call_with_retry<T, E, F, Fut>(policy: RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts => {
                warn!(
                    "Attempt {}/{} failed: {} — retrying after {}ms",
                    attempt,
                    max_attempts,
                    e,
                    policy.delay.as_millis()
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_two_failures_sleeping_twice() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let started = Instant::now();

        let result: Result<&str, String> = call_with_retry(RetryPolicy::default(), move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n <= 2 {
                Err(format!("transient failure {n}"))
            } else {
                Ok("done")
            }
        })
        .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(started.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_failing_propagates_after_max_attempts() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let started = Instant::now();

        let result: Result<(), String> = call_with_retry(RetryPolicy::default(), move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            Err(format!("failure {n}"))
        })
        .await;

        assert_eq!(result, Err("failure 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(started.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_success_does_not_sleep() {
        let started = Instant::now();
        let result: Result<u8, String> = call_with_retry(RetryPolicy::default(), || async { Ok(7) }).await;
        assert_eq!(result, Ok(7));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_attempts_still_runs_once() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let policy = RetryPolicy {
            max_attempts: 0,
            delay: Duration::from_secs(1),
        };
        let result: Result<(), &str> = call_with_retry(policy, move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("nope")
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
