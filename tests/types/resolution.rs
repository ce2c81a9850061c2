//! Settlement through resolvers, returned values and nested futures.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lazy_future::{LazyError, LazyFuture, Resolution, Resolver};

#[tokio::test]
async fn resolver_can_settle_from_another_thread() {
    let lazy = LazyFuture::<u32>::new(|resolver: Resolver<u32, LazyError>| {
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            resolver.resolve(5);
        });
        Resolution::Pending
    });

    assert_eq!(lazy.await, Ok(5));
}

#[tokio::test]
async fn resolver_can_reject() {
    let lazy = LazyFuture::<u32>::new(|resolver: Resolver<u32, LazyError>| {
        assert!(resolver.reject(LazyError::InvalidArgument("rejected early")));
        Resolution::Pending
    });

    assert_eq!(lazy.await, Err(LazyError::InvalidArgument("rejected early")));
}

#[tokio::test]
async fn first_settlement_wins_over_the_returned_value() {
    let lazy = LazyFuture::<u32>::new(|resolver: Resolver<u32, LazyError>| {
        resolver.resolve(1);
        Ok(2)
    });

    assert_eq!(lazy.await, Ok(1));
}

#[tokio::test]
async fn returned_futures_are_flattened() {
    let lazy = LazyFuture::<u32>::new(|_resolver| {
        Resolution::future(async {
            tokio::task::yield_now().await;
            Ok(8)
        })
    });

    assert_eq!(lazy.await, Ok(8));
}

#[tokio::test]
async fn returned_lazy_futures_are_forced_and_flattened() {
    let runs = Arc::new(AtomicU32::new(0));
    let counter = runs.clone();
    let inner = LazyFuture::<u32>::new(move |_resolver| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(13)
    });

    let source = inner.clone();
    let outer = LazyFuture::<u32>::new(move |_resolver| source);
    assert_eq!(runs.load(Ordering::SeqCst), 0);

    assert_eq!(outer.await, Ok(13));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert!(inner.is_started());
}

#[tokio::test]
async fn dropping_every_resolver_rejects() {
    let lazy = LazyFuture::<u32>::new(|resolver: Resolver<u32, LazyError>| {
        drop(resolver);
        Resolution::Pending
    });

    let err = lazy.await.unwrap_err();
    assert_eq!(err, LazyError::WorkFunctionFailure("resolver dropped without settling".to_owned()));
}
