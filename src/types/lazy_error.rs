//! Error taxonomy for lazy futures.
//!
//! [`LazyError`] covers the three ways a lazy future can fail:
//!
//! - construction-time misuse ([`LazyError::InvalidArgument`]), reported synchronously
//! - a missing host capability ([`LazyError::UnsupportedOperation`]), reported synchronously
//! - a failing work function ([`LazyError::WorkFunctionFailure`]), which never escapes the
//!   trigger and is delivered through the future's rejection channel instead
//!
//! # Examples
//!
//! ```
//! use lazy_future::{Castable, ErrorKind, LazyError, LazyFuture};
//!
//! let err = LazyFuture::<i32>::cast(Castable::Value(7)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! assert!(err.to_string().contains("invalid argument"));
//! ```
use core::any::Any;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of a [`LazyError`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value that cannot become a lazy future was supplied.
    InvalidArgument,
    /// The host future lacks a capability the operation needs.
    UnsupportedOperation,
    /// The wrapped work function failed while running.
    WorkFunctionFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::UnsupportedOperation => "unsupported operation",
            ErrorKind::WorkFunctionFailure => "work function failure",
        };
        f.write_str(name)
    }
}

/// Errors produced by [`LazyFuture`](crate::LazyFuture).
///
/// `LazyError` is the default rejection type of a lazy future. Custom rejection
/// types opt in by implementing `From<LazyError>`, which is how a panicking work
/// function reaches observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyError {
    /// Returned synchronously when a value cannot be turned into a lazy future.
    InvalidArgument(&'static str),
    /// Returned synchronously when the underlying future has no finalization hook.
    UnsupportedOperation(&'static str),
    /// Delivered through the rejection channel when the work function fails.
    WorkFunctionFailure(String),
}

impl LazyError {
    /// Returns the category of this error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            LazyError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LazyError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            LazyError::WorkFunctionFailure(_) => ErrorKind::WorkFunctionFailure,
        }
    }

    /// Returns the human readable detail carried by this error.
    pub fn message(&self) -> &str {
        match self {
            LazyError::InvalidArgument(msg) | LazyError::UnsupportedOperation(msg) => *msg,
            LazyError::WorkFunctionFailure(msg) => msg.as_str(),
        }
    }

    /// Builds a [`LazyError::WorkFunctionFailure`] from a caught panic payload.
    ///
    /// `&str` and `String` payloads keep their text; anything else is reported
    /// as an opaque panic.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(msg) => *msg,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(msg) => (*msg).to_owned(),
                Err(_) => "work function panicked".to_owned(),
            },
        };
        LazyError::WorkFunctionFailure(message)
    }

    pub(crate) fn abandoned() -> Self {
        LazyError::WorkFunctionFailure("resolver dropped without settling".to_owned())
    }

    pub(crate) const fn chaining_cycle() -> Self {
        LazyError::InvalidArgument("lazy future cannot settle with its own chain")
    }
}

impl fmt::Display for LazyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for LazyError {}
