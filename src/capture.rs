//! Capture helpers: run a computation and store its outcome in a container.
//!
//! These are the only place where a panic becomes data. The computation runs
//! under [`catch_unwind`]; a normal return is stored as the value, a panic is
//! stored as an [`ExceptionWrapper`] built from its payload. The helpers never
//! panic themselves.
//!
//! The closure is wrapped in [`AssertUnwindSafe`], so it does not need to be
//! `UnwindSafe`. State it mutated before panicking is left as it was.
//!
//! Panics still reach the installed panic hook before they are caught, so the
//! default hook prints them. Re-signalled failures
//! ([`ExceptionWrapper::throw_exception`]) bypass the hook; reading an empty
//! container with `get` does not.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::container::{Try, VoidTry};
use crate::exception::ExceptionWrapper;

/// Runs `f` and captures its return value or its panic.
///
/// ```
/// use halo_try::{make_try_with, Panicked};
///
/// let ok = make_try_with(|| 6 * 7);
/// assert_eq!(ok.value(), Ok(&42));
///
/// let failed = make_try_with(|| -> i32 { std::panic::panic_any("no answer") });
/// assert_eq!(
///     failed.try_get_exception_object::<Panicked>().map(Panicked::message),
///     Some("no answer")
/// );
/// ```
pub fn make_try_with<T, F>(f: F) -> Try<T>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Try::from_value(value),
        Err(payload) => Try::from_exception(capture_panic(payload)),
    }
}

/// Runs `f` for its side effect and captures its completion or its panic.
pub fn make_try_with_void<F>(f: F) -> VoidTry
where
    F: FnOnce(),
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => VoidTry::new(),
        Err(payload) => VoidTry::from_exception(capture_panic(payload)),
    }
}

/// Runs a fallible `f`, capturing `Ok`, `Err` and panics alike.
///
/// An `Err` keeps its concrete type: it can be recovered with
/// [`Try::try_get_exception_object`].
pub fn make_try_with_result<T, E, F>(f: F) -> Try<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<anyhow::Error>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => Try::from_result(result),
        Err(payload) => Try::from_exception(capture_panic(payload)),
    }
}

fn capture_panic(payload: Box<dyn Any + Send>) -> ExceptionWrapper {
    let exception = ExceptionWrapper::from_panic(payload);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        class = exception.class_name(),
        error = %exception,
        "captured panic into try"
    );

    exception
}
