use halo_try::{
    make_try_with, make_try_with_void, unwrap_try_tuple, ExceptionWrapper, Panicked, Try,
    TryError, Unit, VoidTry,
};
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("stage {stage} failed: {reason}")]
struct StageError {
    stage: u32,
    reason: &'static str,
}

#[derive(Debug)]
struct Tracked(Arc<AtomicUsize>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn fail_quietly<T>(error: StageError) -> T {
    panic::resume_unwind(Box::new(anyhow::Error::new(error)))
}

#[test]
fn test_value_container_round_trip() {
    let drops = Arc::new(AtomicUsize::new(0));
    let t = Try::from_value(Tracked(Arc::clone(&drops)));
    assert!(t.has_value());
    assert!(Arc::ptr_eq(&t.value().unwrap().0, &drops));
    drop(t);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failure_container_resignals_same_failure() {
    let e = ExceptionWrapper::new(StageError {
        stage: 2,
        reason: "timeout",
    });
    let t: Try<String> = Try::from_exception(e.clone());
    assert!(t.has_exception());

    let err = t.value().unwrap_err();
    assert_eq!(err.exception(), Some(&e));
    assert_eq!(err.to_string(), "stage 2 failed: timeout");
    assert_eq!(
        t.try_get_exception_object::<StageError>(),
        Some(&StageError {
            stage: 2,
            reason: "timeout"
        })
    );
}

#[test]
fn test_capture_matches_direct_construction() {
    assert_eq!(make_try_with(|| 10_i64), Try::from_value(10_i64));

    let captured: Try<i64> = make_try_with(|| {
        fail_quietly(StageError {
            stage: 1,
            reason: "bad input",
        })
    });
    let direct: Try<i64> = Try::from_exception(ExceptionWrapper::new(StageError {
        stage: 1,
        reason: "bad input",
    }));

    let (a, b) = (captured.exception().unwrap(), direct.exception().unwrap());
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(
        a.downcast_ref::<StageError>(),
        b.downcast_ref::<StageError>()
    );
}

#[test]
fn test_move_transfers_payload_once() {
    let drops = Arc::new(AtomicUsize::new(0));
    let mut a = Try::from_value(Tracked(Arc::clone(&drops)));
    let b = std::mem::take(&mut a);
    assert!(a.is_empty());
    assert!(b.has_value());

    let c = b;
    drop(a);
    assert_eq!(drops.load(Ordering::SeqCst), 0);
    drop(c);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_copy_is_independent() {
    let original = Try::from_value(vec!["a".to_owned()]);
    let mut copy = original.clone();
    copy.value_mut().unwrap().push("b".to_owned());
    assert_eq!(original.value().unwrap().len(), 1);
    assert_eq!(copy.value().unwrap().len(), 2);
}

#[test]
fn test_default_reports_uninitialized_not_domain_failure() {
    let t: Try<u8> = Try::default();
    let err = t.value().unwrap_err();
    assert!(err.is_uninitialized());
    assert!(err.exception().is_none());
}

#[test]
fn test_unwrap_heterogeneous_tuple() {
    let tuple = (
        Try::from_value(1),
        Try::from_value("a"),
        Try::from_value(true),
    );
    assert_eq!(unwrap_try_tuple(tuple), Ok((1, "a", true)));
}

#[test]
fn test_unwrap_stops_at_first_failure() {
    let e = ExceptionWrapper::new(Panicked::new("second"));
    // The third element is empty; reaching it would report an uninitialized access.
    let tuple = (
        Try::from_value(1),
        Try::<&str>::from_exception(e.clone()),
        Try::<bool>::new(),
    );
    assert_eq!(unwrap_try_tuple(&tuple), Err(TryError::Exception(e.clone())));
    assert_eq!(unwrap_try_tuple(tuple), Err(TryError::Exception(e)));
}

#[test]
#[allow(clippy::redundant_clone)]
fn test_self_assignment() {
    let mut t = Try::from_value(String::from("same"));
    t = t.clone();
    assert_eq!(t.value().unwrap(), "same");

    let snapshot = t.clone();
    t.clone_from(&snapshot);
    assert_eq!(t, snapshot);
}

#[test]
fn test_void_capture_runs_side_effect() {
    let count = Cell::new(0);
    let v = make_try_with_void(|| count.set(count.get() + 1));
    assert_eq!(count.get(), 1);
    assert_eq!(v, VoidTry::new());
    assert_eq!(Try::<Unit>::from(&v).value(), Ok(&Unit));
}

#[test]
fn test_get_resignal_crosses_capture_boundary() {
    let stage_one: Try<u32> = make_try_with(|| {
        fail_quietly(StageError {
            stage: 1,
            reason: "disk",
        })
    });
    // A later stage reads the earlier result; its failure flows through unchanged.
    let stage_two = make_try_with(|| stage_one.get() + 1);
    assert_eq!(stage_two.exception(), stage_one.exception());

    let payload = panic::catch_unwind(AssertUnwindSafe(|| stage_two.into_inner())).unwrap_err();
    assert!(ExceptionWrapper::from_panic(payload).is::<StageError>());
}

#[test]
fn test_capture_of_boxed_error_keeps_concrete_type() {
    let t: Try<u32> = make_try_with(|| {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(StageError {
            stage: 4,
            reason: "disk full",
        });
        panic::resume_unwind(Box::new(boxed))
    });
    assert!(t.has_exception_of::<StageError>());
    assert!(t.exception().unwrap().is::<StageError>());
    assert_eq!(
        t.try_get_exception_object::<StageError>().map(|e| e.stage),
        Some(4)
    );
    assert_eq!(t.value().unwrap_err().to_string(), "stage 4 failed: disk full");
}

#[test]
fn test_capture_of_arbitrary_payload_can_be_recovered() {
    #[derive(Debug, PartialEq)]
    struct Abort {
        code: i32,
    }

    let t: Try<u32> = make_try_with(|| panic::resume_unwind(Box::new(Abort { code: 137 })));
    let panicked = t.try_get_exception_object::<Panicked>().unwrap();
    assert!(panicked.is_unknown());
    assert!(panicked.payload_is::<Abort>());
    assert_eq!(panicked.with_payload(|a: &Abort| a.code), Some(137));

    // Re-signalling hands the same payload to the next capture.
    let again: Try<u32> = make_try_with(|| *t.get());
    assert_eq!(again.exception(), t.exception());
    assert_eq!(
        again
            .try_get_exception_object::<Panicked>()
            .and_then(|p| p.with_payload(|a: &Abort| a.code)),
        Some(137)
    );
}
