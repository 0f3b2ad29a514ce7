//! `Try<T>` — a value, a captured failure, or nothing yet.
//!
//! The container is a three-state tagged union. Accessors check the state
//! first: a stored failure is handed back as [`TryError::Exception`] and a
//! container that was never filled reports [`TryError::UsingUninitializedTry`].
//! [`VoidTry`] is the two-state form for computations without a result.

mod serde_impl;
mod void;

use core::fmt;
use core::mem;
use std::error::Error as StdError;

use crate::error::TryError;
use crate::exception::ExceptionWrapper;

pub use void::{Unit, VoidTry};

/// Storage for a [`Try`]. At most one payload is live.
#[derive(PartialEq, Eq)]
enum Contains<T> {
    Nothing,
    Value(T),
    Exception(ExceptionWrapper),
}

/// Either a value of type `T`, a captured failure, or empty.
#[derive(PartialEq, Eq)]
pub struct Try<T> {
    contains: Contains<T>,
}

impl<T> Try<T> {
    /// Creates an empty `Try`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            contains: Contains::Nothing,
        }
    }

    /// Creates a `Try` holding `value`.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self {
            contains: Contains::Value(value),
        }
    }

    /// Creates a `Try` holding a captured failure.
    #[inline]
    pub const fn from_exception(exception: ExceptionWrapper) -> Self {
        Self {
            contains: Contains::Exception(exception),
        }
    }

    /// Converts a `Result`, capturing the error through its type.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<anyhow::Error>,
    {
        match result {
            Ok(value) => Self::from_value(value),
            Err(err) => Self::from_exception(ExceptionWrapper::with_class(
                err.into(),
                core::any::type_name::<E>(),
            )),
        }
    }

    /// Returns `true` if a value is stored.
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self.contains, Contains::Value(_))
    }

    /// Returns `true` if a failure is stored.
    #[inline]
    pub fn has_exception(&self) -> bool {
        matches!(self.contains, Contains::Exception(_))
    }

    /// Returns `true` if a failure of type `E` is stored.
    pub fn has_exception_of<E>(&self) -> bool
    where
        E: StdError + Send + Sync + 'static,
    {
        self.exception().is_some_and(ExceptionWrapper::is::<E>)
    }

    /// Returns `true` if neither a value nor a failure has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.contains, Contains::Nothing)
    }

    /// Checks the state: `Ok` with a value, otherwise the failure to report.
    pub fn throw_if_failed(&self) -> Result<(), TryError> {
        match &self.contains {
            Contains::Value(_) => Ok(()),
            Contains::Exception(e) => Err(TryError::Exception(e.clone())),
            Contains::Nothing => Err(TryError::UsingUninitializedTry),
        }
    }

    /// Borrows the value.
    ///
    /// # Errors
    ///
    /// Returns the stored failure, or [`TryError::UsingUninitializedTry`] if
    /// the container is empty.
    pub fn value(&self) -> Result<&T, TryError> {
        self.throw_if_failed()?;
        match &self.contains {
            Contains::Value(value) => Ok(value),
            _ => Err(TryError::UsingUninitializedTry),
        }
    }

    /// Mutably borrows the value.
    ///
    /// # Errors
    ///
    /// Same as [`Try::value`].
    pub fn value_mut(&mut self) -> Result<&mut T, TryError> {
        self.throw_if_failed()?;
        match &mut self.contains {
            Contains::Value(value) => Ok(value),
            _ => Err(TryError::UsingUninitializedTry),
        }
    }

    /// Moves the value out.
    ///
    /// # Errors
    ///
    /// Same as [`Try::value`]; the failure is moved rather than cloned.
    pub fn into_value(self) -> Result<T, TryError> {
        match self.contains {
            Contains::Value(value) => Ok(value),
            Contains::Exception(e) => Err(TryError::Exception(e)),
            Contains::Nothing => Err(TryError::UsingUninitializedTry),
        }
    }

    /// Borrows the value, re-signalling the failure as a panic.
    ///
    /// # Panics
    ///
    /// Unwinds with the stored [`ExceptionWrapper`], or with
    /// [`TryError::UsingUninitializedTry`] if the container is empty.
    pub fn get(&self) -> &T {
        self.value().unwrap_or_else(|err| err.throw())
    }

    /// Mutably borrows the value, re-signalling the failure as a panic.
    ///
    /// # Panics
    ///
    /// Same as [`Try::get`].
    pub fn get_mut(&mut self) -> &mut T {
        self.value_mut().unwrap_or_else(|err| err.throw())
    }

    /// Moves the value out, re-signalling the failure as a panic.
    ///
    /// # Panics
    ///
    /// Same as [`Try::get`].
    pub fn into_inner(self) -> T {
        self.into_value().unwrap_or_else(|err| err.throw())
    }

    /// The stored failure, if any.
    #[inline]
    pub fn exception(&self) -> Option<&ExceptionWrapper> {
        match &self.contains {
            Contains::Exception(e) => Some(e),
            _ => None,
        }
    }

    /// The stored failure, mutably, if any.
    #[inline]
    pub fn exception_mut(&mut self) -> Option<&mut ExceptionWrapper> {
        match &mut self.contains {
            Contains::Exception(e) => Some(e),
            _ => None,
        }
    }

    /// The stored failure as an `E`, if it is one.
    pub fn try_get_exception_object<E>(&self) -> Option<&E>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.exception().and_then(ExceptionWrapper::downcast_ref::<E>)
    }

    /// Runs `f` on the stored failure if it is an `E`; returns whether it ran.
    pub fn with_exception<E, F>(&self, f: F) -> bool
    where
        E: StdError + Send + Sync + 'static,
        F: FnOnce(&E),
    {
        self.exception()
            .and_then(|e| e.with_exception(f))
            .is_some()
    }

    /// Replaces the contents with `value` and returns a reference to it.
    pub fn emplace(&mut self, value: T) -> &mut T {
        // Drop the old payload before the new one moves in.
        self.contains = Contains::Nothing;
        self.contains = Contains::Value(value);
        match &mut self.contains {
            Contains::Value(value) => value,
            _ => unreachable!("value was just emplaced"),
        }
    }

    /// Replaces the contents with a failure and returns a reference to it.
    pub fn emplace_exception(&mut self, exception: ExceptionWrapper) -> &mut ExceptionWrapper {
        self.contains = Contains::Nothing;
        self.contains = Contains::Exception(exception);
        match &mut self.contains {
            Contains::Exception(e) => e,
            _ => unreachable!("exception was just emplaced"),
        }
    }

    /// Moves the contents out, leaving this container empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Borrows the contents as a `Try<&T>`.
    pub fn as_ref(&self) -> Try<&T> {
        Try {
            contains: match &self.contains {
                Contains::Nothing => Contains::Nothing,
                Contains::Value(value) => Contains::Value(value),
                Contains::Exception(e) => Contains::Exception(e.clone()),
            },
        }
    }

    /// Maps the value, keeping a failure or emptiness unchanged.
    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        Try {
            contains: match self.contains {
                Contains::Nothing => Contains::Nothing,
                Contains::Value(value) => Contains::Value(f(value)),
                Contains::Exception(e) => Contains::Exception(e),
            },
        }
    }
}

impl<T> Default for Try<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Try<T> {
    fn clone(&self) -> Self {
        Self {
            contains: match &self.contains {
                Contains::Nothing => Contains::Nothing,
                Contains::Value(value) => Contains::Value(value.clone()),
                Contains::Exception(e) => Contains::Exception(e.clone()),
            },
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match (&mut self.contains, &source.contains) {
            (Contains::Value(dst), Contains::Value(src)) => dst.clone_from(src),
            _ => *self = source.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.contains {
            Contains::Nothing => f.write_str("Try::Empty"),
            Contains::Value(value) => f.debug_tuple("Try::Value").field(value).finish(),
            Contains::Exception(e) => f.debug_tuple("Try::Exception").field(e).finish(),
        }
    }
}

impl<T> From<ExceptionWrapper> for Try<T> {
    #[inline]
    fn from(exception: ExceptionWrapper) -> Self {
        Self::from_exception(exception)
    }
}

impl<T> From<Try<T>> for Result<T, TryError> {
    #[inline]
    fn from(t: Try<T>) -> Self {
        t.into_value()
    }
}
