use core::fmt;
use std::error::Error as StdError;

use serde::{Deserialize, Serialize};

use super::{Contains, Try};
use crate::error::TryError;
use crate::exception::ExceptionWrapper;

/// The value of a computation that produces nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Unit;

/// Outcome of a computation run for its side effect: done, or a captured failure.
///
/// There is no empty state; a fresh `VoidTry` already holds its value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VoidTry {
    pub(super) exception: Option<ExceptionWrapper>,
}

impl VoidTry {
    /// Creates a `VoidTry` holding its value.
    #[inline]
    pub const fn new() -> Self {
        Self { exception: None }
    }

    /// Creates a `VoidTry` holding a captured failure.
    #[inline]
    pub const fn from_exception(exception: ExceptionWrapper) -> Self {
        Self {
            exception: Some(exception),
        }
    }

    /// Returns `true` unless a failure is stored.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.exception.is_none()
    }

    /// Returns `true` if a failure is stored.
    #[inline]
    pub fn has_exception(&self) -> bool {
        self.exception.is_some()
    }

    /// Returns `true` if a failure of type `E` is stored.
    pub fn has_exception_of<E>(&self) -> bool
    where
        E: StdError + Send + Sync + 'static,
    {
        self.exception.as_ref().is_some_and(ExceptionWrapper::is::<E>)
    }

    /// Checks the state, returning the stored failure if there is one.
    pub fn throw_if_failed(&self) -> Result<(), TryError> {
        match &self.exception {
            Some(e) => Err(TryError::Exception(e.clone())),
            None => Ok(()),
        }
    }

    /// Same as [`VoidTry::throw_if_failed`]; mirrors [`Try::value`].
    ///
    /// # Errors
    ///
    /// Returns the stored failure.
    #[inline]
    pub fn value(&self) -> Result<(), TryError> {
        self.throw_if_failed()
    }

    /// Re-signals the stored failure as a panic.
    ///
    /// # Panics
    ///
    /// Unwinds with the stored [`ExceptionWrapper`] if there is one.
    pub fn get(&self) {
        if let Some(e) = &self.exception {
            e.throw_exception();
        }
    }

    /// The stored failure, if any.
    #[inline]
    pub fn exception(&self) -> Option<&ExceptionWrapper> {
        self.exception.as_ref()
    }

    /// The stored failure, mutably, if any.
    #[inline]
    pub fn exception_mut(&mut self) -> Option<&mut ExceptionWrapper> {
        self.exception.as_mut()
    }

    /// The stored failure as an `E`, if it is one.
    pub fn try_get_exception_object<E>(&self) -> Option<&E>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.exception.as_ref().and_then(ExceptionWrapper::downcast_ref::<E>)
    }

    /// Runs `f` on the stored failure if it is an `E`; returns whether it ran.
    pub fn with_exception<E, F>(&self, f: F) -> bool
    where
        E: StdError + Send + Sync + 'static,
        F: FnOnce(&E),
    {
        self.exception
            .as_ref()
            .and_then(|e| e.with_exception(f))
            .is_some()
    }

    /// Drops any stored failure; the container then holds its value.
    #[inline]
    pub fn emplace(&mut self) {
        self.exception = None;
    }

    /// Replaces the contents with a failure and returns a reference to it.
    pub fn emplace_exception(&mut self, exception: ExceptionWrapper) -> &mut ExceptionWrapper {
        self.exception = None;
        self.exception.insert(exception)
    }
}

impl fmt::Debug for VoidTry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.exception {
            None => f.write_str("VoidTry::Value"),
            Some(e) => f.debug_tuple("VoidTry::Exception").field(e).finish(),
        }
    }
}

impl From<ExceptionWrapper> for VoidTry {
    #[inline]
    fn from(exception: ExceptionWrapper) -> Self {
        Self::from_exception(exception)
    }
}

impl From<&VoidTry> for Try<Unit> {
    fn from(t: &VoidTry) -> Self {
        match &t.exception {
            None => Try::from_value(Unit),
            Some(e) => Try::from_exception(e.clone()),
        }
    }
}

impl From<VoidTry> for Try<Unit> {
    fn from(t: VoidTry) -> Self {
        match t.exception {
            None => Try::from_value(Unit),
            Some(e) => Try::from_exception(e),
        }
    }
}

impl TryFrom<Try<Unit>> for VoidTry {
    type Error = TryError;

    /// An empty `Try<Unit>` has no two-state counterpart and is rejected.
    fn try_from(t: Try<Unit>) -> Result<Self, Self::Error> {
        match t.contains {
            Contains::Value(Unit) => Ok(VoidTry::new()),
            Contains::Exception(e) => Ok(VoidTry::from_exception(e)),
            Contains::Nothing => Err(TryError::UsingUninitializedTry),
        }
    }
}

impl From<VoidTry> for Result<(), TryError> {
    #[inline]
    fn from(t: VoidTry) -> Self {
        match t.exception {
            None => Ok(()),
            Some(e) => Err(TryError::Exception(e)),
        }
    }
}
