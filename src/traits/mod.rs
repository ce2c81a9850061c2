//! Traits at the API boundary of lazy futures.
//!
//! - [`IntoResolution`]: what work functions and continuations may return
//! - [`FutureLazyExt`]: adapts any result-producing future into the lazy vocabulary
//! - [`Shareable`]: bound for values observed by more than one continuation
//!
//! # Examples
//!
//! ```
//! use lazy_future::traits::FutureLazyExt;
//! use lazy_future::LazyError;
//!
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let polled = Arc::new(AtomicBool::new(false));
//! let flag = polled.clone();
//! let lazy = async move {
//!     flag.store(true, Ordering::SeqCst);
//!     Ok::<_, LazyError>(20)
//! }
//! .lazy_resolve(|n| Ok::<_, LazyError>(n + 1), Err);
//!
//! // Adapters count as started; the foreign future is still untouched.
//! assert!(lazy.is_started());
//! assert!(!polled.load(Ordering::SeqCst));
//! ```

pub mod future_ext;
pub mod into_resolution;
pub mod shareable;

pub use future_ext::FutureLazyExt;
pub use into_resolution::IntoResolution;
pub use shareable::Shareable;
