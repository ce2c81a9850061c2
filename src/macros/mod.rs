//! Macros for building lazy futures.
//!
//! - [`macro@crate::lazy`] - Wraps an async expression into a root
//!   [`LazyFuture`](crate::LazyFuture) that is only polled once observed.
//!
//! # Examples
//!
//! ```
//! use lazy_future::{lazy, LazyError, LazyFuture};
//!
//! let answer: LazyFuture<u32> = lazy!(async { Ok::<_, LazyError>(42) });
//! assert!(!answer.is_started());
//! ```

/// Wraps an async expression into a root [`LazyFuture`](crate::LazyFuture).
///
/// The expression is moved into the work function, so nothing inside it is
/// evaluated until an eager operation fires the trigger.
///
/// # Syntax
///
/// - `lazy!(async { ... })` - any expression producing a
///   `Future<Output = Result<T, E>> + Send + 'static`
///
/// # Examples
///
/// ```rust
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use lazy_future::{lazy, LazyError};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let touched = Arc::new(AtomicBool::new(false));
/// let flag = touched.clone();
///
/// let work = lazy!(async move {
///     flag.store(true, Ordering::SeqCst);
///     Ok::<_, LazyError>("done")
/// });
/// assert!(!touched.load(Ordering::SeqCst));
///
/// assert_eq!(work.await, Ok("done"));
/// assert!(touched.load(Ordering::SeqCst));
/// # }
/// ```
#[macro_export]
macro_rules! lazy {
    ($future:expr $(,)?) => {
        $crate::LazyFuture::from_async(move || $future)
    };
}

/// Emits a `tracing` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    };
}

pub(crate) use trace_event;
