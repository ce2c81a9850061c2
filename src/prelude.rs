//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use lazy_future::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`lazy!`]
//! - **Types**: [`LazyFuture`], [`Eager`], [`Resolution`], [`Resolver`], [`Castable`], [`LazyError`]
//! - **Traits**: [`FutureLazyExt`], [`IntoResolution`]
//! - **Feature-gated**: `LazySpanExt` (`tracing`), `ServiceLazyExt` (`tower`)

pub use crate::lazy;

pub use crate::async_ext::Eager;
pub use crate::traits::{FutureLazyExt, IntoResolution};
pub use crate::types::{Castable, LazyError, LazyFuture, Resolution, Resolver};

#[cfg(feature = "tracing")]
pub use crate::async_ext::LazySpanExt;

#[cfg(feature = "tower")]
pub use crate::tower::ServiceLazyExt;
