use std::{fmt, hash::Hash};

use num_integer::Integer;
use num_traits::{CheckedNeg, PrimInt, Signed};

/// Fixed-width signed integer a [`Fraction`](crate::Fraction) can be built from
pub trait Int:
    PrimInt + Signed + Integer + CheckedNeg + Hash + fmt::Debug + fmt::Display + 'static
{
}

macro_rules! impl_int {
    ($($T:ty),+ $(,)?) => {
        $(impl Int for $T {})+
    };
}
impl_int!(i8, i16, i32, i64, i128, isize);
