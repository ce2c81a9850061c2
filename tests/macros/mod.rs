use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use lazy_future::{lazy, LazyError, LazyFuture};

#[tokio::test]
async fn lazy_macro_defers_the_async_block() {
    let runs = Arc::new(AtomicU32::new(0));
    let counter = runs.clone();

    let work: LazyFuture<u32> = lazy!(async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(3)
    });
    let tripled = work.lazy_resolve(|n| Ok::<_, LazyError>(n * 3), Err);
    assert_eq!(runs.load(Ordering::SeqCst), 0);

    assert_eq!(tripled.await, Ok(9));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn lazy_macro_accepts_a_trailing_comma() {
    let work: LazyFuture<&str> = lazy!(async { Ok("trailing") },);
    assert_eq!(work.await, Ok("trailing"));
}
