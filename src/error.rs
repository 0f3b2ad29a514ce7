//! Errors surfaced when a [`Try`](crate::Try) is observed.

use thiserror::Error;

use crate::exception::ExceptionWrapper;

/// The failure reported by the `value` family of accessors.
///
/// A captured domain failure and an access to a never-initialized container
/// are kept apart: the first is data produced by a computation, the second is
/// a programming error on the reading side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TryError {
    /// The container holds a captured failure.
    #[error(transparent)]
    Exception(#[from] ExceptionWrapper),

    /// The container was read before a value or failure was stored in it.
    #[error("using uninitialized try")]
    UsingUninitializedTry,
}

impl TryError {
    /// Returns the captured failure, if this is not an uninitialized access.
    #[inline]
    pub fn exception(&self) -> Option<&ExceptionWrapper> {
        match self {
            TryError::Exception(e) => Some(e),
            TryError::UsingUninitializedTry => None,
        }
    }

    /// Returns `true` for [`TryError::UsingUninitializedTry`].
    #[inline]
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, TryError::UsingUninitializedTry)
    }

    /// Re-signals this failure as a panic.
    ///
    /// A captured failure is re-raised through
    /// [`ExceptionWrapper::throw_exception`] without running the panic hook.
    /// An uninitialized access is a new panic with the `TryError` itself as
    /// payload, so the hook reports where it happened. Either way the capture
    /// helpers recognize the payload again.
    pub fn throw(self) -> ! {
        match self {
            TryError::Exception(e) => e.throw_exception(),
            TryError::UsingUninitializedTry => std::panic::panic_any(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::Panicked;

    #[test]
    fn test_uninitialized_is_distinct_from_exception() {
        let err = TryError::UsingUninitializedTry;
        assert!(err.is_uninitialized());
        assert!(err.exception().is_none());
        assert_eq!(err.to_string(), "using uninitialized try");

        let err = TryError::from(ExceptionWrapper::new(Panicked::new("boom")));
        assert!(!err.is_uninitialized());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_into_anyhow_keeps_message() {
        fn read() -> anyhow::Result<()> {
            Err::<(), _>(TryError::UsingUninitializedTry)?;
            Ok(())
        }
        let err = read().unwrap_err();
        assert_eq!(err.to_string(), "using uninitialized try");
        assert!(err.downcast_ref::<TryError>().is_some());
    }

    #[test]
    fn test_uninitialized_throw_reaches_panic_hook() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        // The hook is process-wide; only count panics raised on this thread.
        let reported = Arc::new(AtomicBool::new(false));
        let seen = Arc::clone(&reported);
        let me = std::thread::current().id();
        let previous = Arc::new(std::panic::take_hook());
        let forward = Arc::clone(&previous);
        std::panic::set_hook(Box::new(move |info| {
            if std::thread::current().id() == me
                && info.payload().downcast_ref::<TryError>().is_some()
            {
                seen.store(true, Ordering::SeqCst);
            }
            (*forward)(info);
        }));
        let payload = std::panic::catch_unwind(|| TryError::UsingUninitializedTry.throw());
        std::panic::set_hook(Box::new(move |info| (*previous)(info)));

        assert!(reported.load(Ordering::SeqCst));
        assert_eq!(
            payload.unwrap_err().downcast_ref::<TryError>(),
            Some(&TryError::UsingUninitializedTry)
        );
    }
}
