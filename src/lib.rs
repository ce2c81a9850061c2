//! Deferred-execution futures.
//!
//! A [`LazyFuture`] wraps a work function and does not run it until its
//! result is observed, while still allowing continuations to be composed up
//! front. Observation happens through the eager operations
//! ([`LazyFuture::resolve`], [`LazyFuture::observe`], [`LazyFuture::start`],
//! `.await`); composition through the lazy ones ([`LazyFuture::lazy_resolve`],
//! [`LazyFuture::lazy_observe`], [`LazyFuture::lazy_finally`]).
//!
//! Scheduling, wake-ups and settlement are left to the host futures machinery:
//! every lazy future sits on a [`futures_util::future::Shared`] future and is
//! driven by whichever executor polls the returned [`Eager`] future.
//!
//! # Examples
//!
//! ## Deferred work
//!
//! ```
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use lazy_future::LazyFuture;
//!
//! let ran = Arc::new(AtomicBool::new(false));
//! let flag = ran.clone();
//! let root = LazyFuture::<u32>::new(move |_resolver| {
//!     flag.store(true, Ordering::SeqCst);
//!     Ok(1)
//! });
//!
//! let _composed = root
//!     .lazy_resolve(|n| Ok::<_, lazy_future::LazyError>(n + 1), Err)
//!     .lazy_finally(|| ())
//!     .unwrap();
//! assert!(!ran.load(Ordering::SeqCst));
//!
//! root.start();
//! assert!(ran.load(Ordering::SeqCst));
//! ```
//!
//! ## Observing a chain
//!
//! ```
//! use lazy_future::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let parsed = LazyFuture::<String>::new(|_resolver| Ok("17".to_owned()))
//!     .lazy_resolve(
//!         |raw| raw.parse::<u32>().map_err(|_| LazyError::InvalidArgument("not a number")),
//!         Err,
//!     );
//!
//! let recovered = parsed.observe(|_err| Ok::<_, LazyError>(0)).await;
//! assert_eq!(recovered, Ok(17));
//! # }
//! ```

/// Async surface: the eager future and runtime integrations
pub mod async_ext;
/// Macros for building lazy futures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion and extension traits
pub mod traits;
/// LazyFuture, Trigger, Resolution and the error taxonomy
pub mod types;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use async_ext::Eager;
pub use traits::{FutureLazyExt, IntoResolution, Shareable};
pub use types::{
    Castable, ErrorKind, LazyError, LazyFuture, Resolution, Resolver, SharedFuture, Trigger,
    TriggerState,
};
