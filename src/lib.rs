//! # `halo-try` - Deferred Outcome Containers
//!
//! A value-or-failure container for computations whose failures cannot be
//! propagated where they happen: pipeline stages, callback chains, batched
//! results. A [`Try<T>`] holds a value, a captured failure, or nothing yet;
//! the failure stays silent until the value is asked for.
//!
//! ## Key Features
//!
//! - **Three-state container**: [`Try<T>`] is empty, holds a `T`, or holds an
//!   [`ExceptionWrapper`]. Reading an empty container is reported as
//!   [`TryError::UsingUninitializedTry`], never as a domain failure.
//! - **Unit form**: [`VoidTry`] for computations run for their side effect,
//!   with only two states and no storage for the value.
//! - **Panic capture**: [`make_try_with`] and [`make_try_with_void`] turn a
//!   panic into a stored failure. Typed payloads keep their concrete type;
//!   any other payload is kept inside a [`Panicked`].
//!   [`make_try_with_result`] does the same for a returned `Err`.
//! - **Re-signal**: [`Try::get`] and [`ExceptionWrapper::throw_exception`]
//!   raise the captured failure again as a panic, and a later capture
//!   recovers the same failure.
//! - **Tuple unwrap**: [`unwrap_try_tuple`] turns `(Try<A>, Try<B>, ..)` into
//!   `(A, B, ..)`, failing with the first failed element in index order.
//!
//! ## Architecture
//!
//! 1. **Failures** (`exception`): [`ExceptionWrapper`] stores a type-erased
//!    [`anyhow::Error`] behind an `Arc`. Cloning shares it; downcasting
//!    recovers the typed error.
//! 2. **Containers** (`container`): native enums, so the payload in place is
//!    always the one the tag names and drops happen exactly once.
//! 3. **Helpers** (`capture`, `tuple`): built only on the container's public
//!    surface.
//!
//! ## Example
//!
//! ```rust
//! use halo_try::{make_try_with, unwrap_try_tuple, Try, TryError};
//!
//! let parsed = make_try_with(|| "42".parse::<u32>().unwrap());
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled.value(), Ok(&84));
//!
//! let pending: Try<u32> = Try::new();
//! assert_eq!(pending.value(), Err(TryError::UsingUninitializedTry));
//!
//! let both = unwrap_try_tuple((doubled, Try::from_value("ok")));
//! assert_eq!(both, Ok((84, "ok")));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when a panic is captured and when a
//!   failure is re-signalled.
//! - `proptest`: expose strategies for containers under `halo_try::testing`.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod capture;
pub mod container;
pub mod error;
pub mod exception;
#[cfg(feature = "proptest")]
pub mod testing;
pub mod tuple;

pub use capture::{make_try_with, make_try_with_result, make_try_with_void};
pub use container::{Try, Unit, VoidTry};
pub use error::TryError;
pub use exception::{ExceptionWrapper, Panicked};
pub use tuple::{unwrap_try_tuple, UnwrapTryTuple};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Unit>() == 0);

    // The unit form stores only the failure; `None` fits in its niche.
    assert!(mem::size_of::<VoidTry>() == mem::size_of::<ExceptionWrapper>());

    // The tag adds at most one word on top of the larger payload.
    assert!(mem::size_of::<Try<Unit>>() <= mem::size_of::<ExceptionWrapper>() + mem::size_of::<usize>());
    assert!(mem::size_of::<Try<u64>>() <= mem::size_of::<ExceptionWrapper>() + mem::size_of::<usize>());

    // Failures are shared, not deep-copied: the wrapper stays small.
    assert!(mem::size_of::<ExceptionWrapper>() <= mem::size_of::<usize>() * 3);
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
