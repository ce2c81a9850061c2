use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use lazy_future::{LazyError, LazyFuture};

#[tokio::test]
async fn finally_runs_after_fulfillment_and_keeps_the_value() {
    let runs = Arc::new(AtomicU32::new(0));
    let cleaned = Arc::new(AtomicBool::new(false));

    let counter = runs.clone();
    let root = LazyFuture::<u32>::new(move |_resolver| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(11)
    });

    let flag = cleaned.clone();
    let guarded = root
        .lazy_finally(move || flag.store(true, Ordering::SeqCst))
        .expect("root futures support finally");
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert!(!cleaned.load(Ordering::SeqCst));

    assert_eq!(guarded.await, Ok(11));
    assert!(cleaned.load(Ordering::SeqCst));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn finally_runs_after_rejection_and_keeps_the_error() {
    let cleaned = Arc::new(AtomicBool::new(false));
    let root = LazyFuture::<u32>::new(|_resolver| Err(LazyError::InvalidArgument("nope")));

    let flag = cleaned.clone();
    let guarded = root.lazy_finally(move || flag.store(true, Ordering::SeqCst)).unwrap();

    assert_eq!(guarded.await, Err(LazyError::InvalidArgument("nope")));
    assert!(cleaned.load(Ordering::SeqCst));
}

#[tokio::test]
async fn finally_handlers_only_run_when_their_branch_is_observed() {
    let cleaned = Arc::new(AtomicBool::new(false));
    let root = LazyFuture::<u32>::new(|_resolver| Ok(1));

    let flag = cleaned.clone();
    let _guarded = root.lazy_finally(move || flag.store(true, Ordering::SeqCst)).unwrap();

    assert_eq!(root.clone().await, Ok(1));
    assert!(!cleaned.load(Ordering::SeqCst));
}
