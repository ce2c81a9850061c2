//! Settlement values and resolve/reject handles.
//!
//! A work function or a continuation settles a lazy future by producing a
//! [`Resolution`]: a plain value, an error, another future to flatten, another
//! lazy future to force and flatten, or [`Resolution::Pending`] when settlement
//! is left to a [`Resolver`].
use core::fmt;
use core::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures_channel::oneshot;
use futures_util::future::{self, BoxFuture, FutureExt};

use crate::traits::Shareable;
use crate::types::lazy_future::LazyFuture;

/// The outcome handed to a fresh future.
pub enum Resolution<T, E> {
    /// Fulfill with a value.
    Value(T),
    /// Reject with an error.
    Error(E),
    /// Settle with whatever this future settles with.
    Future(BoxFuture<'static, Result<T, E>>),
    /// Force the lazy future and settle with its outcome.
    ///
    /// A root settled with a lazy future of its own chain rejects with
    /// [`LazyError::InvalidArgument`](crate::LazyError::InvalidArgument). A
    /// [`Resolution::Future`] that awaits its own chain cannot be detected and
    /// never settles.
    Lazy(LazyFuture<T, E>),
    /// Do not settle here.
    ///
    /// Returned by work functions that settle through their [`Resolver`]. As a
    /// continuation result it leaves the derived future pending forever.
    Pending,
}

impl<T, E> Resolution<T, E> {
    /// Boxes `future` into [`Resolution::Future`].
    pub fn future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Resolution::Future(future.boxed())
    }

    /// Returns `true` for [`Resolution::Pending`].
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Resolution::Pending)
    }
}

impl<T, E> Resolution<T, E>
where
    T: Shareable,
    E: Shareable,
{
    /// Turns the resolution into a single-level future, forcing lazy sources.
    pub(crate) fn into_settled(self) -> BoxFuture<'static, Result<T, E>> {
        match self {
            Resolution::Value(value) => future::ready(Ok(value)).boxed(),
            Resolution::Error(error) => future::ready(Err(error)).boxed(),
            Resolution::Future(future) => future,
            Resolution::Lazy(lazy) => lazy.into_eager().boxed(),
            Resolution::Pending => future::pending().boxed(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Resolution<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Resolution::Value(value),
            Err(error) => Resolution::Error(error),
        }
    }
}

impl<T, E> fmt::Debug for Resolution<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Resolution::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Resolution::Future(_) => f.write_str("Future(..)"),
            Resolution::Lazy(lazy) => f.debug_tuple("Lazy").field(lazy).finish(),
            Resolution::Pending => f.write_str("Pending"),
        }
    }
}

/// Resolve/reject handle of a fresh future.
///
/// Every clone settles the same future; only the first settlement counts.
pub struct Resolver<T, E> {
    sender: Arc<Mutex<Option<oneshot::Sender<Resolution<T, E>>>>>,
}

impl<T, E> Clone for Resolver<T, E> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T, E> Resolver<T, E> {
    pub(crate) fn new(sender: oneshot::Sender<Resolution<T, E>>) -> Self {
        Self { sender: Arc::new(Mutex::new(Some(sender))) }
    }

    /// Fulfills the future with `value`. Returns `false` if it was already settled.
    pub fn resolve(&self, value: T) -> bool {
        self.settle(Resolution::Value(value))
    }

    /// Rejects the future with `error`. Returns `false` if it was already settled.
    pub fn reject(&self, error: E) -> bool {
        self.settle(Resolution::Error(error))
    }

    /// Settles the future with an arbitrary resolution.
    ///
    /// [`Resolution::Pending`] is ignored and leaves the resolver usable.
    pub fn settle(&self, resolution: Resolution<T, E>) -> bool {
        if resolution.is_pending() {
            return false;
        }

        let sender = self.sender.lock().unwrap_or_else(PoisonError::into_inner).take();
        match sender {
            // A closed receiver means every observer is gone; the outcome is moot.
            Some(sender) => sender.send(resolution).is_ok(),
            None => false,
        }
    }

    /// Returns `true` once any clone has settled the future.
    pub fn is_settled(&self) -> bool {
        self.sender.lock().unwrap_or_else(PoisonError::into_inner).is_none()
    }
}

impl<T, E> fmt::Debug for Resolver<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").field("settled", &self.is_settled()).finish()
    }
}
