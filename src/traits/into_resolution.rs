//! Trait for converting continuation results into a [`Resolution`].
//!
//! Work functions and continuations settle the next future by returning any
//! type implementing [`IntoResolution`]:
//!
//! - `Result<T, E>` - fulfills with `T` or rejects with `E`
//! - `Resolution<T, E>` - identity conversion
//! - `LazyFuture<T, E>` - forced and flattened
//! - `Eager<T, E>` - flattened
//!
//! # Examples
//!
//! ```
//! use lazy_future::traits::IntoResolution;
//! use lazy_future::Resolution;
//!
//! let resolution = Ok::<_, &str>(5).into_resolution();
//! assert!(matches!(resolution, Resolution::Value(5)));
//! ```
use crate::async_ext::Eager;
use crate::traits::Shareable;
use crate::types::lazy_future::LazyFuture;
use crate::types::resolution::Resolution;

/// Converts a type into a [`Resolution`] that settles a future.
///
/// The associated types pin down the settled value and error so closures
/// returning `Ok(..)`/`Err(..)` infer without annotations on the handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot settle a lazy future",
    label = "return a `Result`, `Resolution`, `LazyFuture` or `Eager` here",
    note = "wrap other futures with `Resolution::future`"
)]
pub trait IntoResolution {
    /// The fulfillment value.
    type Ok;
    /// The rejection value.
    type Error;

    /// Converts `self` into a [`Resolution`].
    fn into_resolution(self) -> Resolution<Self::Ok, Self::Error>;
}

impl<T, E> IntoResolution for Result<T, E> {
    type Ok = T;
    type Error = E;

    #[inline]
    fn into_resolution(self) -> Resolution<T, E> {
        self.into()
    }
}

impl<T, E> IntoResolution for Resolution<T, E> {
    type Ok = T;
    type Error = E;

    #[inline]
    fn into_resolution(self) -> Resolution<T, E> {
        self
    }
}

impl<T, E> IntoResolution for LazyFuture<T, E> {
    type Ok = T;
    type Error = E;

    #[inline]
    fn into_resolution(self) -> Resolution<T, E> {
        Resolution::Lazy(self)
    }
}

impl<T, E> IntoResolution for Eager<T, E>
where
    T: Shareable,
    E: Shareable,
{
    type Ok = T;
    type Error = E;

    #[inline]
    fn into_resolution(self) -> Resolution<T, E> {
        Resolution::future(self)
    }
}
