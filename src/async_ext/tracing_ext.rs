//! Tracing integration for lazy futures.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! lazy-future = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::{Instrument, Span};

use crate::traits::Shareable;
use crate::types::LazyFuture;

/// Extension trait that attaches a tracing span to a lazy chain.
///
/// The returned lazy future shares the chain's trigger. Whenever an eager
/// observer drives it, polling of everything upstream (including the future a
/// work function returned) happens inside the span.
///
/// # Example
///
/// ```rust,ignore
/// use lazy_future::async_ext::LazySpanExt;
/// use tracing::info_span;
///
/// let report = LazyFuture::from_async(move || build_report(id))
///     .in_span(info_span!("report", id));
/// ```
pub trait LazySpanExt<T, E> {
    /// Instruments the chain with `span`.
    fn in_span(&self, span: Span) -> LazyFuture<T, E>;

    /// Instruments the chain with the span current at the call site.
    fn in_current_span(&self) -> LazyFuture<T, E> {
        self.in_span(Span::current())
    }
}

impl<T, E> LazySpanExt<T, E> for LazyFuture<T, E>
where
    T: Shareable,
    E: Shareable,
{
    fn in_span(&self, span: Span) -> LazyFuture<T, E> {
        self.derive(self.shared().instrument(span))
    }
}
