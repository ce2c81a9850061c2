//! Lazy future types.
//!
//! - [`LazyFuture`]: the deferred-execution wrapper
//! - [`Trigger`]: the start-once cell shared across a chain
//! - [`Resolution`] / [`Resolver`]: how a fresh future gets settled
//! - [`Castable`]: sources accepted by [`LazyFuture::cast`]
//! - [`LazyError`]: the error taxonomy
//!
//! # Examples
//!
//! ```
//! use lazy_future::{LazyFuture, TriggerState};
//!
//! let root = LazyFuture::<&str>::new(|resolver| {
//!     resolver.resolve("settled through the resolver");
//!     lazy_future::Resolution::Pending
//! });
//! let branch = root.lazy_observe(Err);
//!
//! assert_eq!(branch.state(), TriggerState::Unstarted);
//! branch.start();
//! assert_eq!(root.state(), TriggerState::Started);
//! ```

pub mod castable;
pub mod lazy_error;
pub mod lazy_future;
pub mod resolution;
pub mod trigger;

pub use castable::Castable;
pub use lazy_error::{ErrorKind, LazyError};
pub use lazy_future::{LazyFuture, SharedFuture};
pub use resolution::{Resolution, Resolver};
pub use trigger::{Trigger, TriggerState};
