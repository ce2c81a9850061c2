//! Tokio-specific extensions.
//!
//! Timeouts are not part of a lazy future itself; they are layered on top by
//! racing the eager future against `tokio::time::timeout`.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! lazy-future = { version = "0.1", features = ["async-tokio"] }
//! ```

use core::time::Duration;

use tokio::task::JoinHandle;

use crate::traits::Shareable;
use crate::types::LazyFuture;

/// Outcome of an observation raced against a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeoutResult<T, E> {
    /// The lazy future fulfilled in time.
    Ok(T),
    /// The lazy future rejected in time.
    Err(E),
    /// The deadline passed first. The computation keeps running.
    Timeout(Duration),
}

impl<T, E> TimeoutResult<T, E> {
    /// Returns `true` if the result is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the result is `Err`.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if the deadline passed first.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Converts to a standard `Result`, turning a timeout into an error.
    pub fn into_result(self) -> Result<T, E>
    where
        E: From<TimeoutError>,
    {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(e),
            Self::Timeout(d) => Err(E::from(TimeoutError(d))),
        }
    }
}

/// Error type representing a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutError(pub Duration);

impl core::fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "lazy future not settled after {:?}", self.0)
    }
}

impl std::error::Error for TimeoutError {}

impl<T, E> LazyFuture<T, E>
where
    T: Shareable,
    E: Shareable,
{
    /// Fires the trigger and waits at most `duration` for the outcome.
    ///
    /// A timeout does not cancel the computation; observing again later sees
    /// the same single run.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use lazy_future::prelude::*;
    /// use lazy_future::async_ext::TimeoutResult;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let never = LazyFuture::<u8>::new(|resolver| {
    ///     std::mem::forget(resolver);
    ///     Resolution::Pending
    /// });
    /// let result = never.resolve_with_timeout(Duration::from_millis(10)).await;
    /// assert_eq!(result, TimeoutResult::Timeout(Duration::from_millis(10)));
    /// # }
    /// ```
    pub async fn resolve_with_timeout(&self, duration: Duration) -> TimeoutResult<T, E> {
        let eager = self.clone().into_eager();
        match tokio::time::timeout(duration, eager).await {
            Ok(Ok(value)) => TimeoutResult::Ok(value),
            Ok(Err(error)) => TimeoutResult::Err(error),
            Err(_elapsed) => TimeoutResult::Timeout(duration),
        }
    }

    /// Fires the trigger and drives the outcome on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(&self) -> JoinHandle<Result<T, E>> {
        tokio::spawn(self.clone().into_eager())
    }
}
