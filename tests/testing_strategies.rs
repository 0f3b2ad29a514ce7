#![cfg(feature = "proptest")]

use halo_try::testing::{arb_try, arb_void_try};
use halo_try::{unwrap_try_tuple, Try, TryError, Unit, VoidTry};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_state_queries_are_exclusive(t in arb_try(any::<i16>())) {
        let states = [t.is_empty(), t.has_value(), t.has_exception()];
        prop_assert_eq!(states.iter().filter(|s| **s).count(), 1);
    }

    #[test]
    fn test_clone_preserves_observation(t in arb_try(".*")) {
        let copy = t.clone();
        prop_assert_eq!(copy.value(), t.value());
    }

    #[test]
    fn test_pair_unwrap_agrees_with_elements(a in arb_try(any::<u8>()), b in arb_try(any::<bool>())) {
        let expected: Result<(u8, bool), TryError> = match (a.value(), b.value()) {
            (Err(e), _) => Err(e),
            (Ok(_), Err(e)) => Err(e),
            (Ok(x), Ok(y)) => Ok((*x, *y)),
        };
        prop_assert_eq!(unwrap_try_tuple((a, b)), expected);
    }

    #[test]
    fn test_void_try_round_trips_through_unit(v in arb_void_try()) {
        let unit: Try<Unit> = Try::from(&v);
        prop_assert_eq!(unit.has_exception(), v.has_exception());
        prop_assert_eq!(VoidTry::try_from(unit), Ok(v));
    }
}
