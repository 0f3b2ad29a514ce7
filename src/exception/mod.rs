//! `ExceptionWrapper` — a captured failure that can be stored, cloned and re-signalled.
//!
//! The wrapper holds a type-erased [`anyhow::Error`] behind an `Arc`, so copies
//! are cheap and share the same underlying error. Equality is identity: two
//! wrappers are equal when they carry the same captured failure, which is what
//! survives a re-signal and a later capture.

mod payload;

use core::any::{type_name, Any};
use core::fmt;
use std::error::Error as StdError;
use std::sync::Arc;

use crate::error::TryError;

use payload::BoxedError;
pub use payload::Panicked;

/// A captured failure.
#[derive(Clone)]
pub struct ExceptionWrapper {
    error: Arc<anyhow::Error>,
    class: &'static str,
}

impl ExceptionWrapper {
    /// Captures a typed error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_class(anyhow::Error::new(error), type_name::<E>())
    }

    /// Captures a plain message with no error type of its own.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::with_class(anyhow::Error::msg(message), type_name::<M>())
    }

    /// Captures an already type-erased error.
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self::with_class(error, type_name::<anyhow::Error>())
    }

    pub(crate) fn with_class(error: anyhow::Error, class: &'static str) -> Self {
        Self {
            error: Arc::new(error),
            class,
        }
    }

    /// Captures the payload of a panic caught with `catch_unwind`.
    ///
    /// Recognized payloads keep their typed error: a re-signalled
    /// `ExceptionWrapper` is adopted as-is, a [`TryError`], an
    /// [`anyhow::Error`] or a boxed `dyn Error` keeps its error, and string
    /// messages become a [`Panicked`]. Anything else becomes an unknown
    /// [`Panicked`] that keeps the payload itself, see
    /// [`Panicked::with_payload`].
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<ExceptionWrapper>() {
            Ok(wrapper) => return *wrapper,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<TryError>() {
            Ok(err) => {
                return match *err {
                    TryError::Exception(wrapper) => wrapper,
                    uninit @ TryError::UsingUninitializedTry => Self::new(uninit),
                }
            }
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<anyhow::Error>() {
            Ok(err) => return Self::from_anyhow(*err),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<Box<dyn StdError + Send + Sync>>() {
            Ok(err) => {
                return Self::with_class(
                    anyhow::Error::new(BoxedError(*err)),
                    type_name::<Box<dyn StdError + Send + Sync>>(),
                )
            }
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => return Self::new(Panicked::new(*message)),
            Err(payload) => payload,
        };
        match payload.downcast::<String>() {
            Ok(message) => Self::new(Panicked::new(*message)),
            Err(payload) => Self::new(Panicked::opaque(payload)),
        }
    }

    /// Re-signals the captured failure by unwinding with this wrapper as payload.
    ///
    /// The panic hook is not invoked. A later [`make_try_with`](crate::make_try_with)
    /// (or [`ExceptionWrapper::from_panic`]) recovers a wrapper equal to `self`.
    pub fn throw_exception(&self) -> ! {
        #[cfg(feature = "tracing")]
        tracing::trace!(class = self.class, error = %self, "re-signalling captured failure");

        std::panic::resume_unwind(Box::new(self.clone()))
    }

    /// Name of the type the failure was captured from.
    #[inline]
    pub fn class_name(&self) -> &'static str {
        self.class
    }

    /// Returns `true` if the captured error is an `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: StdError + Send + Sync + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Returns the captured error as an `E`, if it is one.
    ///
    /// An error captured from a boxed `dyn Error` panic payload downcasts to
    /// its concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.error.downcast_ref::<E>().or_else(|| {
            self.error
                .downcast_ref::<BoxedError>()
                .and_then(|boxed| boxed.0.downcast_ref::<E>())
        })
    }

    /// Runs `f` on the captured error if it is an `E`.
    pub fn with_exception<E, R, F>(&self, f: F) -> Option<R>
    where
        E: StdError + Send + Sync + 'static,
        F: FnOnce(&E) -> R,
    {
        self.downcast_ref::<E>().map(f)
    }

    /// The captured error as a trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        let error: &anyhow::Error = &self.error;
        error.as_ref()
    }
}

impl fmt::Display for ExceptionWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.error, f)
    }
}

impl fmt::Debug for ExceptionWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionWrapper")
            .field("class", &self.class)
            .field("error", &format_args!("{}", self.error))
            .finish()
    }
}

impl StdError for ExceptionWrapper {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.as_error().source()
    }
}

impl PartialEq for ExceptionWrapper {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.error, &other.error)
    }
}

impl Eq for ExceptionWrapper {}
