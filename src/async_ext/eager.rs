//! The plain future returned by eager operations.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::lazy_future::SharedFuture;

pin_project! {
    /// A non-lazy view of a lazy future's outcome.
    ///
    /// Returned by [`LazyFuture::resolve`](crate::LazyFuture::resolve),
    /// [`LazyFuture::observe`](crate::LazyFuture::observe) and `.await` on a
    /// lazy future, after the chain's trigger has fired. Polling it drives the
    /// shared computation; clones observe the same outcome.
    #[must_use = "futures do nothing unless polled"]
    pub struct Eager<T, E> {
        #[pin]
        inner: SharedFuture<T, E>,
    }
}

impl<T, E> Eager<T, E> {
    #[inline]
    pub(crate) fn new(inner: SharedFuture<T, E>) -> Self {
        Self { inner }
    }
}

impl<T, E> Eager<T, E>
where
    T: Clone,
    E: Clone,
{
    /// Returns the outcome if any observer already drove it to completion.
    pub fn peek(&self) -> Option<&Result<T, E>> {
        self.inner.peek()
    }
}

impl<T, E> Clone for Eager<T, E> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T, E> core::fmt::Debug for Eager<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Eager").finish_non_exhaustive()
    }
}

impl<T, E> Future for Eager<T, E>
where
    T: Clone,
    E: Clone,
{
    type Output = Result<T, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx)
    }
}

impl<T, E> FusedFuture for Eager<T, E>
where
    T: Clone,
    E: Clone,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}
