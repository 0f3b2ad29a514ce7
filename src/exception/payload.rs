use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// A panic that carried a message or an arbitrary value rather than a typed error.
///
/// Panics raised with `panic!("...")` unwind with a `&'static str` or `String`
/// payload; both become a `Panicked` when captured. Payloads of any other type
/// are recorded with [`Panicked::UNKNOWN`] as their message and kept as-is, so
/// they can still be inspected with [`Panicked::with_payload`].
#[derive(Clone, Error)]
#[error("{message}")]
pub struct Panicked {
    message: Cow<'static, str>,
    payload: Option<Arc<Mutex<Box<dyn Any + Send>>>>,
}

impl Panicked {
    /// Message used for panic payloads that are neither strings nor errors.
    pub const UNKNOWN: &'static str = "unknown panic payload";

    /// Creates a panic record with the given message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            payload: None,
        }
    }

    pub(crate) fn opaque(payload: Box<dyn Any + Send>) -> Self {
        Self {
            message: Cow::Borrowed(Self::UNKNOWN),
            payload: Some(Arc::new(Mutex::new(payload))),
        }
    }

    /// The panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the payload could not be interpreted as a message.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.message == Self::UNKNOWN
    }

    /// Returns `true` if the raw panic payload is kept and is a `P`.
    pub fn payload_is<P: Any>(&self) -> bool {
        self.with_payload(|_: &P| ()).is_some()
    }

    /// Runs `f` on the raw panic payload if it is kept and is a `P`.
    ///
    /// Only payloads that were neither strings nor errors are kept. The
    /// payload is locked while `f` runs, so `f` must not read the payload of
    /// the same failure again.
    pub fn with_payload<P, R, F>(&self, f: F) -> Option<R>
    where
        P: Any,
        F: FnOnce(&P) -> R,
    {
        let payload = self.payload.as_ref()?;
        let guard = payload
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (**guard).downcast_ref::<P>().map(f)
    }
}

impl fmt::Debug for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panicked")
            .field("message", &self.message)
            .field("payload", &self.payload.is_some())
            .finish()
    }
}

/// Equal when the messages match and both share the same raw payload (or neither has one).
impl PartialEq for Panicked {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && match (&self.payload, &other.payload) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl Eq for Panicked {}

impl Hash for Panicked {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

/// A panic payload that was already a boxed error; downcasts look through it.
#[derive(Debug)]
pub(crate) struct BoxedError(pub(crate) Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}
