//! Tower integration for lazy futures.
//!
//! [`LazyService`] answers every request immediately with a [`LazyFuture`];
//! the wrapped service is only driven (readiness and call) when that lazy
//! future is observed. Requests whose responses are never observed never
//! reach the inner service.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! lazy-future = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use lazy_future::tower::LazyLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(LazyLayer::new())
//!     .service(my_service);
//! ```

use core::convert::Infallible;
use core::fmt;
use core::task::{Context, Poll};
use std::sync::Arc;

use futures_util::future::{self, Ready};
use tower::{Layer, Service, ServiceExt};

use crate::types::{LazyError, LazyFuture};

/// A Tower [`Layer`] producing [`LazyService`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct LazyLayer {
    _private: (),
}

impl LazyLayer {
    /// Creates a new `LazyLayer`.
    #[inline]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl<S> Layer<S> for LazyLayer {
    type Service = LazyService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        LazyService::new(inner)
    }
}

/// Error of a lazily dispatched request.
///
/// Service errors are kept behind an `Arc` so every observer of the lazy
/// response can receive one.
#[derive(Debug)]
pub enum LazyServiceError<E> {
    /// The inner service failed.
    Service(Arc<E>),
    /// The deferred dispatch itself failed.
    Lazy(LazyError),
}

impl<E> LazyServiceError<E> {
    /// Returns the inner service error, if that is what failed.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            LazyServiceError::Service(error) => Some(&**error),
            LazyServiceError::Lazy(_) => None,
        }
    }
}

impl<E> Clone for LazyServiceError<E> {
    fn clone(&self) -> Self {
        match self {
            LazyServiceError::Service(error) => LazyServiceError::Service(error.clone()),
            LazyServiceError::Lazy(error) => LazyServiceError::Lazy(error.clone()),
        }
    }
}

impl<E> From<LazyError> for LazyServiceError<E> {
    #[inline]
    fn from(error: LazyError) -> Self {
        LazyServiceError::Lazy(error)
    }
}

impl<E: fmt::Display> fmt::Display for LazyServiceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LazyServiceError::Service(error) => write!(f, "service error: {}", error),
            LazyServiceError::Lazy(error) => write!(f, "deferred dispatch failed: {}", error),
        }
    }
}

impl<E> std::error::Error for LazyServiceError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LazyServiceError::Service(error) => Some(&**error),
            LazyServiceError::Lazy(error) => Some(error),
        }
    }
}

/// Lazy response produced by [`LazyService`].
pub type LazyResponse<R, E> = LazyFuture<Arc<R>, LazyServiceError<E>>;

/// A Tower [`Service`] that defers requests to the inner service.
///
/// Calling it never touches the inner service. Each request is dispatched
/// with `ServiceExt::oneshot` on a clone of the inner service the first time
/// its lazy response is observed.
#[derive(Clone, Debug)]
pub struct LazyService<S> {
    inner: S,
}

impl<S> LazyService<S> {
    /// Creates a new `LazyService` wrapping the given service.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for LazyService<S>
where
    S: Service<Request> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Response: Send + Sync + 'static,
    S::Error: Send + Sync + 'static,
    Request: Send + 'static,
{
    type Response = LazyResponse<S::Response, S::Error>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Infallible>>;

    #[inline]
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Readiness of the inner service is awaited when the request is dispatched.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let service = self.inner.clone();
        let response = LazyFuture::from_async(move || async move {
            service
                .oneshot(request)
                .await
                .map(Arc::new)
                .map_err(|error| LazyServiceError::Service(Arc::new(error)))
        });
        future::ready(Ok(response))
    }
}

/// Extension trait for easily wrapping services lazily.
pub trait ServiceLazyExt<Request>: Service<Request> + Sized {
    /// Wraps this service so requests are only dispatched once observed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use lazy_future::tower::ServiceLazyExt;
    ///
    /// let deferred = my_service.lazy();
    /// ```
    fn lazy(self) -> LazyService<Self> {
        LazyService::new(self)
    }
}

impl<S, Request> ServiceLazyExt<Request> for S where S: Service<Request> {}
