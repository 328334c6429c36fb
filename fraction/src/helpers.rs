//! Integer helpers behind fraction reduction.
//!
//! Every helper is checked: a fixed-width overflow reports
//! [`FractionError::Overflow`] and a division by zero reports
//! [`FractionError::ZeroDenominator`] instead of trapping.

use crate::{FractionError, Int};

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(a, 0)` is `a` exactly as given, so a negative `a` yields a negative
/// result. Every other call yields the non-negative divisor, reporting
/// [`FractionError::Overflow`] only when that divisor is `|T::MIN|`.
/// `gcd(0, 0)` is `0`.
pub fn gcd<T: Int>(a: T, b: T) -> Result<T, FractionError> {
    if b.is_zero() {
        return Ok(a);
    }

    // remainders run on non-positive magnitudes, where `T::MIN` fits
    non_positive_gcd(non_positive(a), non_positive(b))
        .checked_neg()
        .ok_or(FractionError::Overflow)
}

fn non_positive_gcd<T: Int>(a: T, b: T) -> T {
    if b.is_zero() {
        return a;
    }
    // `T::MIN % -1` overflows, every remainder by -1 is 0
    let remainder = if b == -T::one() { T::zero() } else { a % b };
    non_positive_gcd(b, remainder)
}

fn non_positive<T: Int>(value: T) -> T {
    if value > T::zero() {
        -value
    } else {
        value
    }
}

/// Least common multiple, `a * b / gcd(a, b)`.
pub fn lcm<T: Int>(a: T, b: T) -> Result<T, FractionError> {
    let divisor = gcd(a, b)?;
    checked_division(a, divisor)?
        .checked_mul(&b)
        .ok_or(FractionError::Overflow)
}

pub(crate) fn checked_division<T: Int>(dividend: T, divisor: T) -> Result<T, FractionError> {
    if divisor.is_zero() {
        return Err(FractionError::ZeroDenominator);
    }
    dividend
        .checked_div(&divisor)
        .ok_or(FractionError::Overflow)
}

pub(crate) fn checked_product<T: Int>(lhs: T, rhs: T) -> Result<T, FractionError> {
    lhs.checked_mul(&rhs).ok_or(FractionError::Overflow)
}
