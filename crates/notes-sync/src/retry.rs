//! Bounded retry with an injectable pause
//!
//! [`with_retry`] is independent of git: it runs any fallible operation up
//! to a fixed number of attempts and pauses between attempts (never after
//! the last one). The pause length comes from a [`backoff::backoff::Backoff`]
//! and the pause itself from a [`Sleeper`], so tests can observe delays
//! without waiting for them.

use std::time::Duration;

use backoff::backoff::{Backoff, Constant};

use crate::CancellationToken;

/// Suspends the calling thread.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Outcome of a retried operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retried<T, E> {
    /// The last attempt's result
    pub result: Result<T, E>,
    /// Attempts actually made, at least 1
    pub attempts: u32,
}

/// How many times to try and how long to wait in between.
///
/// Fixed delay, no growth. The two presets cover the policies in use:
/// three attempts, or one attempt plus a single retry after a wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Three attempts, ten seconds apart.
    pub fn standard() -> Self {
        Self::new(3, Duration::from_secs(10))
    }

    /// One attempt plus one retry after `delay`.
    pub fn single_retry(delay: Duration) -> Self {
        Self::new(2, delay)
    }

    /// The constant interval between attempts.
    pub fn backoff(&self) -> Constant {
        Constant::new(self.delay)
    }

    /// Run `operation` under this policy.
    pub fn run<T, E, F, S>(
        &self,
        operation: F,
        sleeper: &S,
        cancel: Option<&CancellationToken>,
    ) -> Retried<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
        S: Sleeper + ?Sized,
    {
        with_retry(
            operation,
            self.max_attempts,
            &mut self.backoff(),
            sleeper,
            cancel,
        )
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Call `operation` until it succeeds or `max_attempts` are used.
///
/// `operation` receives the 1-based attempt number. Between a failed
/// attempt and the next one the thread pauses for `backoff.next_backoff()`.
/// Retrying stops early when the backoff yields `None` or `cancel` is set;
/// the last error is then returned. A `max_attempts` of 0 is treated as 1.
pub fn with_retry<T, E, F, B, S>(
    mut operation: F,
    max_attempts: u32,
    backoff: &mut B,
    sleeper: &S,
    cancel: Option<&CancellationToken>,
) -> Retried<T, E>
where
    F: FnMut(u32) -> Result<T, E>,
    B: Backoff,
    S: Sleeper + ?Sized,
{
    let max_attempts = max_attempts.max(1);
    backoff.reset();

    let mut attempt = 1;
    loop {
        let error = match operation(attempt) {
            Ok(value) => {
                return Retried {
                    result: Ok(value),
                    attempts: attempt,
                };
            }
            Err(error) => error,
        };

        if attempt >= max_attempts {
            return Retried {
                result: Err(error),
                attempts: attempt,
            };
        }
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            tracing::info!(attempt, "Cancelled; not retrying");
            return Retried {
                result: Err(error),
                attempts: attempt,
            };
        }
        let Some(delay) = backoff.next_backoff() else {
            tracing::debug!(attempt, "Backoff exhausted; not retrying");
            return Retried {
                result: Err(error),
                attempts: attempt,
            };
        };

        tracing::debug!(
            attempt,
            max_attempts,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "Retrying after delay"
        );
        sleeper.sleep(delay);
        attempt += 1;
    }
}
