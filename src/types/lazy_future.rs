//! The lazy future wrapper.
//!
//! A [`LazyFuture`] holds a work function and does not run it until the result
//! is observed through an eager operation. Continuations composed with the
//! lazy operations share the root's [`Trigger`], so observing any future in
//! the chain starts the one root computation.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use lazy_future::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let runs = Arc::new(AtomicU32::new(0));
//! let counter = runs.clone();
//!
//! let root = LazyFuture::<u32>::new(move |_resolver| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     Ok(20)
//! });
//! let chained = root.lazy_resolve(|n| Ok::<_, LazyError>(n + 1), Err);
//! assert_eq!(runs.load(Ordering::SeqCst), 0);
//!
//! let value = chained.resolve(|n| Ok::<_, LazyError>(n * 2), Err).await;
//! assert_eq!(value, Ok(42));
//! assert_eq!(runs.load(Ordering::SeqCst), 1);
//! # }
//! ```
use core::fmt;
use core::future::{Future, IntoFuture};
use std::panic::{self, AssertUnwindSafe};

use futures_channel::oneshot;
use futures_util::future::{BoxFuture, FutureExt, Shared};

use crate::async_ext::Eager;
use crate::macros::trace_event;
use crate::traits::{IntoResolution, Shareable};
use crate::types::lazy_error::LazyError;
use crate::types::resolution::{Resolution, Resolver};
use crate::types::trigger::{Trigger, TriggerState};

/// The shared, type-erased future underneath every lazy future.
pub type SharedFuture<T, E> = Shared<BoxFuture<'static, Result<T, E>>>;

/// A future whose computation starts only when its result is observed.
///
/// Eager operations ([`resolve`](Self::resolve), [`observe`](Self::observe),
/// [`start`](Self::start), `.await`) fire the trigger. Lazy operations
/// ([`lazy_resolve`](Self::lazy_resolve), [`lazy_observe`](Self::lazy_observe),
/// [`lazy_finally`](Self::lazy_finally)) compose without firing it.
///
/// Cloning a `LazyFuture` yields another handle to the same future and trigger.
#[must_use = "lazy futures do nothing unless observed"]
pub struct LazyFuture<T, E = LazyError> {
    future: SharedFuture<T, E>,
    trigger: Trigger,
    finalize: bool,
}

impl<T, E> LazyFuture<T, E> {
    pub(crate) fn chained(future: SharedFuture<T, E>, trigger: Trigger, finalize: bool) -> Self {
        Self { future, trigger, finalize }
    }

    /// Wraps a future that is driven by someone else, with an already started trigger.
    pub(crate) fn adapt(future: BoxFuture<'static, Result<T, E>>, finalize: bool) -> Self
    where
        T: Clone,
        E: Clone,
    {
        Self::chained(future.shared(), Trigger::started(), finalize)
    }

    /// Builds a lazy future on `future` that shares this chain's trigger.
    pub(crate) fn derive<U, E2, Fut>(&self, future: Fut) -> LazyFuture<U, E2>
    where
        Fut: Future<Output = Result<U, E2>> + Send + 'static,
        U: Clone,
        E2: Clone,
    {
        LazyFuture::chained(future.boxed().shared(), self.trigger.clone(), self.finalize)
    }

    pub(crate) fn shared(&self) -> SharedFuture<T, E> {
        self.future.clone()
    }

    /// Returns `true` once the chain's trigger has fired.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.trigger.is_started()
    }

    /// Returns the lifecycle state of the chain's trigger.
    #[inline]
    pub fn state(&self) -> TriggerState {
        self.trigger.state()
    }

    /// Returns the trigger shared by this chain.
    #[inline]
    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Returns `true` when the underlying future supports finalization hooks.
    #[inline]
    pub fn supports_finally(&self) -> bool {
        self.finalize
    }

    /// Returns `true` when both handles refer to the same lazy future.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.trigger.ptr_eq(&other.trigger) && Shared::ptr_eq(&self.future, &other.future)
    }

    /// Fires the trigger without attaching a continuation.
    ///
    /// Returns `true` only for the call that started the chain.
    #[inline]
    pub fn start(&self) -> bool {
        self.trigger.fire()
    }
}

impl<T, E> LazyFuture<T, E>
where
    T: Shareable,
    E: Shareable,
{
    /// Creates a root lazy future from a work function.
    ///
    /// `work` runs at most once, when the first eager operation is invoked
    /// anywhere in the chain. It receives the [`Resolver`] of the fresh future
    /// and may settle through it or by returning a value, an error, another
    /// future or another lazy future; the first settlement wins. A panic inside
    /// `work` is caught and delivered to observers as
    /// [`LazyError::WorkFunctionFailure`]. If `work` returns
    /// [`Resolution::Pending`] and every resolver is dropped without settling,
    /// observers see a `WorkFunctionFailure` as well.
    ///
    /// Settling with a lazy future of the same chain (this root or anything
    /// derived from it) rejects with [`LazyError::InvalidArgument`] instead of
    /// waiting on itself.
    pub fn new<F, R>(work: F) -> Self
    where
        F: FnOnce(Resolver<T, E>) -> R + Send + 'static,
        R: IntoResolution<Ok = T, Error = E>,
        E: From<LazyError>,
    {
        let (sender, receiver) = oneshot::channel::<Resolution<T, E>>();
        let resolver = Resolver::new(sender);
        let feed = resolver.clone();

        let trigger = Trigger::new(move || {
            let resolution = match panic::catch_unwind(AssertUnwindSafe(move || work(resolver))) {
                Ok(returned) => returned.into_resolution(),
                Err(payload) => {
                    let error = LazyError::from_panic(payload);
                    trace_event!(debug, error = %error, "work function panicked, rejecting");
                    Resolution::Error(E::from(error))
                },
            };
            feed.settle(resolution);
        });

        let chain = trigger.clone();
        let future = async move {
            match receiver.await {
                Ok(Resolution::Lazy(lazy)) if lazy.trigger().ptr_eq(&chain) => {
                    trace_event!(debug, "lazy future settled with its own chain, rejecting");
                    Err(E::from(LazyError::chaining_cycle()))
                },
                Ok(resolution) => resolution.into_settled().await,
                Err(oneshot::Canceled) => Err(E::from(LazyError::abandoned())),
            }
        };

        Self::chained(future.boxed().shared(), trigger, true)
    }

    /// Creates a root lazy future from an async producer.
    ///
    /// `f` is called, and the returned future polled, only once observed.
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: From<LazyError>,
    {
        Self::new(move |_resolver: Resolver<T, E>| Resolution::future(f()))
    }

    /// Returns the settled outcome if some observer already drove it to completion.
    ///
    /// Never fires the trigger.
    pub fn peek(&self) -> Option<&Result<T, E>> {
        self.future.peek()
    }

    /// Attaches a continuation without firing the trigger.
    ///
    /// `on_fulfilled` or `on_rejected` runs at most once, after the upstream
    /// settles and only if some eager observer drives the returned future.
    pub fn lazy_resolve<F, G, R>(&self, on_fulfilled: F, on_rejected: G) -> LazyFuture<R::Ok, R::Error>
    where
        F: FnOnce(T) -> R + Send + 'static,
        G: FnOnce(E) -> R + Send + 'static,
        R: IntoResolution,
        R::Ok: Shareable,
        R::Error: Shareable,
    {
        let upstream = self.shared();
        self.derive(async move {
            let next = match upstream.await {
                Ok(value) => on_fulfilled(value).into_resolution(),
                Err(error) => on_rejected(error).into_resolution(),
            };
            next.into_settled().await
        })
    }

    /// Attaches a rejection handler without firing the trigger.
    ///
    /// Fulfillment passes through unchanged.
    pub fn lazy_observe<G, R>(&self, on_rejected: G) -> LazyFuture<T, R::Error>
    where
        G: FnOnce(E) -> R + Send + 'static,
        R: IntoResolution<Ok = T>,
        R::Error: Shareable,
    {
        let upstream = self.shared();
        self.derive(async move {
            let recovered = match upstream.await {
                Ok(value) => return Ok(value),
                Err(error) => on_rejected(error).into_resolution(),
            };
            recovered.into_settled().await
        })
    }

    /// Attaches a handler that runs on settlement, preserving the outcome.
    ///
    /// Does not fire the trigger. Fails with
    /// [`LazyError::UnsupportedOperation`] when the underlying future was adapted
    /// from a host future without a finalization hook.
    pub fn lazy_finally<H>(&self, handler: H) -> Result<LazyFuture<T, E>, LazyError>
    where
        H: FnOnce() + Send + 'static,
    {
        if !self.finalize {
            return Err(LazyError::UnsupportedOperation(
                "underlying future does not support finalization",
            ));
        }

        let upstream = self.shared();
        Ok(self.derive(async move {
            let outcome = upstream.await;
            handler();
            outcome
        }))
    }

    /// Fires the trigger and attaches a continuation, returning a plain future.
    pub fn resolve<F, G, R>(&self, on_fulfilled: F, on_rejected: G) -> Eager<R::Ok, R::Error>
    where
        F: FnOnce(T) -> R + Send + 'static,
        G: FnOnce(E) -> R + Send + 'static,
        R: IntoResolution,
        R::Ok: Shareable,
        R::Error: Shareable,
    {
        self.start();
        Eager::new(self.lazy_resolve(on_fulfilled, on_rejected).shared())
    }

    /// Fires the trigger and attaches a rejection handler, returning a plain future.
    pub fn observe<G, R>(&self, on_rejected: G) -> Eager<T, R::Error>
    where
        G: FnOnce(E) -> R + Send + 'static,
        R: IntoResolution<Ok = T>,
        R::Error: Shareable,
    {
        self.start();
        Eager::new(self.lazy_observe(on_rejected).shared())
    }

    /// Fires the trigger and returns the underlying outcome as a plain future.
    pub fn into_eager(self) -> Eager<T, E> {
        self.start();
        Eager::new(self.future)
    }
}

impl<T, E> IntoFuture for LazyFuture<T, E>
where
    T: Shareable,
    E: Shareable,
{
    type Output = Result<T, E>;
    type IntoFuture = Eager<T, E>;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        self.into_eager()
    }
}

impl<T, E> Clone for LazyFuture<T, E> {
    fn clone(&self) -> Self {
        Self {
            future: self.future.clone(),
            trigger: self.trigger.clone(),
            finalize: self.finalize,
        }
    }
}

impl<T, E> fmt::Debug for LazyFuture<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyFuture")
            .field("state", &self.state())
            .field("finalize", &self.finalize)
            .finish_non_exhaustive()
    }
}
