//! Unwrapping a tuple of containers into a tuple of values.
//!
//! Elements are checked left to right. The first element that holds a failure
//! (or is empty) ends the unwrap with that element's error; the elements after
//! it are not inspected.

use crate::container::Try;
use crate::error::TryError;

/// A tuple of [`Try`] containers that can be unwrapped as a whole.
///
/// Implemented for tuples of arity 1 to 12, by value (yielding owned values)
/// and by reference (yielding references).
pub trait UnwrapTryTuple {
    /// The tuple of unwrapped values.
    type Output;

    /// Unwraps every element in index order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first element that does not hold a value.
    fn unwrap_try_tuple(self) -> Result<Self::Output, TryError>;
}

/// Unwraps a tuple of containers; see [`UnwrapTryTuple`].
///
/// ```
/// use halo_try::{unwrap_try_tuple, Try};
///
/// let tuple = (Try::from_value(1), Try::from_value("a"), Try::from_value(true));
/// assert_eq!(unwrap_try_tuple(tuple), Ok((1, "a", true)));
/// ```
///
/// # Errors
///
/// Returns the error of the first element that does not hold a value.
#[inline]
pub fn unwrap_try_tuple<Tuple>(tuple: Tuple) -> Result<Tuple::Output, TryError>
where
    Tuple: UnwrapTryTuple,
{
    tuple.unwrap_try_tuple()
}

macro_rules! impl_unwrap_try_tuple {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty),+> UnwrapTryTuple for ($(Try<$ty>,)+) {
            type Output = ($($ty,)+);

            #[inline]
            fn unwrap_try_tuple(self) -> Result<Self::Output, TryError> {
                let ($($var,)+) = self;
                Ok(($($var.into_value()?,)+))
            }
        }

        impl<'a, $($ty),+> UnwrapTryTuple for &'a ($(Try<$ty>,)+) {
            type Output = ($(&'a $ty,)+);

            #[inline]
            fn unwrap_try_tuple(self) -> Result<Self::Output, TryError> {
                let ($($var,)+) = self;
                Ok(($($var.value()?,)+))
            }
        }
    };
}

impl_unwrap_try_tuple!(T0 t0);
impl_unwrap_try_tuple!(T0 t0, T1 t1);
impl_unwrap_try_tuple!(T0 t0, T1 t1, T2 t2);
impl_unwrap_try_tuple!(T0 t0, T1 t1, T2 t2, T3 t3);
impl_unwrap_try_tuple!(T0 t0, T1 t1, T2 t2, T3 t3, T4 t4);
impl_unwrap_try_tuple!(T0 t0, T1 t1, T2 t2, T3 t3, T4 t4, T5 t5);
impl_unwrap_try_tuple!(T0 t0, T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6);
impl_unwrap_try_tuple!(T0 t0, T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7);
impl_unwrap_try_tuple!(T0 t0, T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8);
impl_unwrap_try_tuple!(T0 t0, T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9);
impl_unwrap_try_tuple!(
    T0 t0, T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10
);
impl_unwrap_try_tuple!(
    T0 t0, T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11
);
