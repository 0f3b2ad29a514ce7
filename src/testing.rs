//! Proptest strategies for containers (feature `proptest`).

use core::fmt;

use proptest::prelude::*;
use proptest::strategy::LazyJust;

use crate::container::{Try, VoidTry};
use crate::exception::{ExceptionWrapper, Panicked};

/// A failure with a short generated message.
pub fn arb_exception() -> impl Strategy<Value = ExceptionWrapper> {
    "[a-z ]{1,24}".prop_map(|message| ExceptionWrapper::new(Panicked::new(message)))
}

/// A `Try` in any of its three states, with values drawn from `value`.
pub fn arb_try<S>(value: S) -> impl Strategy<Value = Try<S::Value>>
where
    S: Strategy,
    S::Value: fmt::Debug,
{
    prop_oneof![
        1 => LazyJust::new(Try::new),
        4 => value.prop_map(Try::from_value),
        2 => arb_exception().prop_map(Try::from_exception),
    ]
}

/// A `VoidTry` in either of its states.
pub fn arb_void_try() -> impl Strategy<Value = VoidTry> {
    prop_oneof![
        LazyJust::new(VoidTry::new),
        arb_exception().prop_map(VoidTry::from_exception),
    ]
}
