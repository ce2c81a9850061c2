//! Tests for FutureLazyExt trait.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use lazy_future::prelude::*;

#[tokio::test]
async fn into_lazy_does_not_poll_the_future() {
    let polls = Arc::new(AtomicU32::new(0));
    let counter = polls.clone();

    let lazy = async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, LazyError>("polled")
    }
    .into_lazy();
    tokio::task::yield_now().await;
    assert_eq!(polls.load(Ordering::SeqCst), 0);
    assert!(lazy.supports_finally());
    // Adapters own an already started trigger.
    assert!(lazy.is_started());

    assert_eq!(lazy.await, Ok("polled"));
    assert_eq!(polls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn lazy_resolve_on_a_foreign_future() {
    let lazy = async { Ok::<_, LazyError>(2) }
        .lazy_resolve(|n| Ok::<_, LazyError>(n * 21), Err)
        .lazy_resolve(|n| Ok::<_, LazyError>(n.to_string()), Err);

    assert_eq!(lazy.await, Ok(String::from("42")));
}

#[tokio::test]
async fn lazy_observe_on_a_foreign_future_recovers() {
    let lazy = async { Err::<u32, _>(LazyError::InvalidArgument("empty")) }
        .lazy_observe(|err| match err {
            LazyError::InvalidArgument(_) => Ok::<_, LazyError>(0),
            other => Err(other),
        });

    assert_eq!(lazy.await, Ok(0));
}

#[tokio::test]
async fn eager_futures_can_be_relazified_downstream() {
    let root = LazyFuture::<u32>::new(|_resolver| Ok(3));
    let eager = root.resolve(|n| Ok::<_, LazyError>(n + 1), Err);

    let downstream = eager.lazy_resolve(|n| Ok::<_, LazyError>(n * 10), Err);
    assert!(downstream.is_started());
    assert_eq!(downstream.await, Ok(40));
}
