//! Conversion of arbitrary sources into a [`LazyFuture`].
//!
//! [`LazyFuture::cast`] accepts a [`Castable`] and always returns a lazy future
//! with a stable identity: an existing lazy future comes back as the very same
//! instance, and a foreign future comes back wrapped in an adapter that owns it.
//!
//! # Examples
//!
//! ```
//! use lazy_future::{Castable, LazyError, LazyFuture};
//!
//! let root = LazyFuture::<i32>::new(|_resolver| Ok(1));
//! let same = LazyFuture::cast(Castable::Lazy(root.clone())).unwrap();
//! assert!(same.ptr_eq(&root));
//!
//! let adapted = LazyFuture::cast(Castable::future(async { Ok::<_, LazyError>(2) })).unwrap();
//! assert!(adapted.supports_finally());
//!
//! assert!(LazyFuture::<i32>::cast(Castable::Value(3)).is_err());
//! ```
use core::fmt;
use core::future::Future;

use futures_util::future::{BoxFuture, FutureExt};

use crate::traits::Shareable;
use crate::types::lazy_error::LazyError;
use crate::types::lazy_future::LazyFuture;

/// Everything [`LazyFuture::cast`] can be asked to convert.
pub enum Castable<T, E> {
    /// An existing lazy future; returned unchanged.
    Lazy(LazyFuture<T, E>),
    /// A host future with the full contract, finalization hooks included.
    Future(BoxFuture<'static, Result<T, E>>),
    /// A host future offering continuation attachment only.
    ///
    /// Lazy futures adapted from it reject [`LazyFuture::lazy_finally`].
    Bare(BoxFuture<'static, Result<T, E>>),
    /// A plain value, which is not a future. Casting it fails.
    Value(T),
}

impl<T, E> Castable<T, E> {
    /// Boxes `future` into [`Castable::Future`].
    pub fn future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Castable::Future(future.boxed())
    }

    /// Boxes `future` into [`Castable::Bare`].
    pub fn bare<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Castable::Bare(future.boxed())
    }
}

impl<T, E> From<LazyFuture<T, E>> for Castable<T, E> {
    #[inline]
    fn from(lazy: LazyFuture<T, E>) -> Self {
        Castable::Lazy(lazy)
    }
}

impl<T, E> fmt::Debug for Castable<T, E>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Castable::Lazy(lazy) => f.debug_tuple("Lazy").field(lazy).finish(),
            Castable::Future(_) => f.write_str("Future(..)"),
            Castable::Bare(_) => f.write_str("Bare(..)"),
            Castable::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl<T, E> LazyFuture<T, E>
where
    T: Shareable,
    E: Shareable,
{
    /// Converts `source` into a lazy future without polling anything.
    ///
    /// - [`Castable::Lazy`] returns the same instance.
    /// - [`Castable::Future`] and [`Castable::Bare`] return an adapter whose
    ///   trigger is already started; eager operations forward to the wrapped
    ///   future.
    /// - [`Castable::Value`] fails with [`LazyError::InvalidArgument`].
    pub fn cast(source: Castable<T, E>) -> Result<Self, LazyError> {
        match source {
            Castable::Lazy(lazy) => Ok(lazy),
            Castable::Future(future) => Ok(Self::adapt(future, true)),
            Castable::Bare(future) => Ok(Self::adapt(future, false)),
            Castable::Value(_) => Err(LazyError::InvalidArgument(
                "LazyFuture must be created from a work function or a future",
            )),
        }
    }
}
