use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

use lazy_future::{LazyError, LazyFuture, Trigger, TriggerState};

#[test]
fn one_thread_wins_the_race_to_fire() {
    let runs = Arc::new(AtomicU32::new(0));
    let counter = runs.clone();
    let trigger = Trigger::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let winners: u32 = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let trigger = trigger.clone();
                scope.spawn(move || trigger.fire())
            })
            .collect();
        handles.into_iter().map(|h| u32::from(h.join().unwrap())).sum()
    });

    assert_eq!(winners, 1);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert_eq!(trigger.state(), TriggerState::Started);
}

#[test]
fn starting_from_threads_runs_the_work_once() {
    let runs = Arc::new(AtomicU32::new(0));
    let counter = runs.clone();
    let root = LazyFuture::<u32>::new(move |_resolver| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(1)
    });
    let tip = root.lazy_resolve(|n| Ok::<_, LazyError>(n + 1), Err);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| root.start());
            scope.spawn(|| tip.start());
        }
    });

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn debug_output_reports_the_state() {
    let trigger = Trigger::new(|| {});
    assert_eq!(format!("{:?}", trigger), "Trigger { state: Unstarted }");

    trigger.fire();
    assert_eq!(format!("{:?}", trigger), "Trigger { state: Started }");
}
