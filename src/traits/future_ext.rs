//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Brings a foreign future into the lazy vocabulary without polling it, by
//! wrapping it in an adapter [`LazyFuture`]. The foreign future is left
//! untouched; eager operations on the adapter forward to it.

use core::future::Future;

use futures_util::future::FutureExt;

use crate::traits::{IntoResolution, Shareable};
use crate::types::lazy_future::LazyFuture;

/// Adapts any result-producing future into a [`LazyFuture`].
///
/// # Examples
///
/// ```rust
/// use lazy_future::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let doubled = async { Ok::<_, LazyError>(21) }
///     .lazy_resolve(|n| Ok::<_, LazyError>(n * 2), Err);
///
/// assert_eq!(doubled.await, Ok(42));
/// # }
/// ```
pub trait FutureLazyExt<T, E>: Future<Output = Result<T, E>> + Sized + Send + 'static {
    /// Wraps the future in an adapter lazy future.
    ///
    /// The adapter's trigger is already started: the computation belongs to
    /// whoever produced the future. Lazy operations never poll it.
    fn into_lazy(self) -> LazyFuture<T, E>
    where
        T: Shareable,
        E: Shareable,
    {
        LazyFuture::adapt(self.boxed(), true)
    }

    /// Attaches a two-armed continuation without polling the future.
    fn lazy_resolve<F, G, R>(self, on_fulfilled: F, on_rejected: G) -> LazyFuture<R::Ok, R::Error>
    where
        T: Shareable,
        E: Shareable,
        F: FnOnce(T) -> R + Send + 'static,
        G: FnOnce(E) -> R + Send + 'static,
        R: IntoResolution,
        R::Ok: Shareable,
        R::Error: Shareable,
    {
        self.into_lazy().lazy_resolve(on_fulfilled, on_rejected)
    }

    /// Attaches a rejection handler without polling the future.
    fn lazy_observe<G, R>(self, on_rejected: G) -> LazyFuture<T, R::Error>
    where
        T: Shareable,
        E: Shareable,
        G: FnOnce(E) -> R + Send + 'static,
        R: IntoResolution<Ok = T>,
        R::Error: Shareable,
    {
        self.into_lazy().lazy_observe(on_rejected)
    }
}

impl<Fut, T, E> FutureLazyExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> + Send + 'static {}
