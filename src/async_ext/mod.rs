//! Async surface of lazy futures.
//!
//! [`Eager`] is the plain future handed out by eager operations. Runtime
//! integrations live behind feature flags:
//!
//! - `async-tokio`: [`TimeoutResult`] and `LazyFuture::resolve_with_timeout` / `spawn`
//! - `tracing`: [`LazySpanExt`] for running observers inside a span
//!
//! ```toml
//! [dependencies]
//! lazy-future = { version = "0.1", features = ["async-tokio", "tracing"] }
//! ```

mod eager;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

#[cfg(feature = "tracing")]
mod tracing_ext;

pub use eager::Eager;

#[cfg(feature = "async-tokio")]
pub use tokio_ext::{TimeoutError, TimeoutResult};

#[cfg(feature = "tracing")]
pub use tracing_ext::LazySpanExt;
