use lazy_future::{IntoResolution, LazyError, LazyFuture, Resolution};

#[test]
fn results_map_onto_values_and_errors() {
    assert!(matches!(Ok::<u8, LazyError>(1).into_resolution(), Resolution::Value(1)));
    assert!(matches!(
        Err::<u8, _>(LazyError::InvalidArgument("x")).into_resolution(),
        Resolution::Error(LazyError::InvalidArgument("x"))
    ));
}

#[test]
fn resolutions_convert_to_themselves() {
    let pending: Resolution<u8, LazyError> = Resolution::Pending;
    assert!(pending.into_resolution().is_pending());
}

#[test]
fn lazy_futures_convert_without_starting() {
    let lazy = LazyFuture::<u8>::new(|_resolver| Ok(1));
    let resolution = lazy.clone().into_resolution();

    assert!(matches!(resolution, Resolution::Lazy(_)));
    assert!(!lazy.is_started());
}

#[tokio::test]
async fn eager_futures_convert_into_nested_futures() {
    let eager = LazyFuture::<u8>::new(|_resolver| Ok(9)).into_eager();

    match eager.into_resolution() {
        Resolution::Future(future) => assert_eq!(future.await, Ok(9)),
        other => panic!("expected a future, got {:?}", other),
    }
}
