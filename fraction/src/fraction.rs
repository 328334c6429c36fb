use std::{
    fmt,
    iter::{Product, Sum},
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_rational::Ratio;
use num_traits::{One, Zero};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    helpers::{checked_division, checked_product, gcd, lcm},
    FractionError, Int,
};

/// Immutable `numerator / denominator` pair over a fixed-width signed integer.
///
/// The denominator is stored non-negative. Nothing else is normalized at
/// construction, so equality is structural: `1 / 2` and `2 / 4` are different
/// values until an arithmetic operation reduces them. Use
/// [`Fraction::value_eq`] to compare by rational value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction<T> {
    numerator: T,
    denominator: T,
}

impl<T> Fraction<T>
where
    T: Int,
{
    /// Creates a fraction without validating the denominator.
    ///
    /// A negative denominator flips the sign of both parts. A zero denominator
    /// is stored as given; arithmetic on such a value fails later with
    /// [`FractionError::ZeroDenominator`].
    pub fn new(numerator: T, denominator: T) -> Self {
        if denominator < T::zero() {
            return Self {
                numerator: -numerator,
                denominator: -denominator,
            };
        }
        Self {
            numerator,
            denominator,
        }
    }

    pub fn try_new(numerator: T, denominator: T) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Self::sign_normalized(numerator, denominator)
    }

    #[inline]
    pub fn from_integer(integer: T) -> Self {
        Self {
            numerator: integer,
            denominator: T::one(),
        }
    }

    #[inline]
    pub fn numerator(&self) -> T {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> T {
        self.denominator
    }

    pub fn added_by(&self, other: &Self) -> Result<Self, FractionError> {
        self.add_reduced(other).map_err(|err| {
            log::trace!("{self} + {other} failed: {err}");
            err
        })
    }

    pub fn subtracted_by(&self, other: &Self) -> Result<Self, FractionError> {
        self.added_by(&other.negate()?)
    }

    pub fn multiplied_by(&self, other: &Self) -> Result<Self, FractionError> {
        self.mul_reduced(other).map_err(|err| {
            log::trace!("{self} * {other} failed: {err}");
            err
        })
    }

    pub fn divided_by(&self, other: &Self) -> Result<Self, FractionError> {
        self.multiplied_by(&other.reciprocal()?)
    }

    /// Flips the sign of the numerator, keeping the denominator.
    pub fn negate(&self) -> Result<Self, FractionError> {
        let numerator = self
            .numerator
            .checked_neg()
            .ok_or(FractionError::Overflow)?;
        Ok(Self {
            numerator,
            denominator: self.denominator,
        })
    }

    /// Swaps numerator and denominator.
    ///
    /// The reciprocal of `0 / d` is `d / 0`, which is representable but
    /// cannot take part in further arithmetic.
    pub fn reciprocal(&self) -> Result<Self, FractionError> {
        Self::sign_normalized(self.denominator, self.numerator)
    }

    /// Lowest-terms form of the stored value.
    pub fn reduced(&self) -> Result<Self, FractionError> {
        let divisor = gcd(self.numerator, self.denominator)?;
        Self::sign_normalized(
            checked_division(self.numerator, divisor)?,
            checked_division(self.denominator, divisor)?,
        )
    }

    /// Compares rational values rather than stored parts.
    ///
    /// Fractions with a zero denominator have no rational value and only equal
    /// themselves structurally.
    pub fn value_eq(&self, other: &Self) -> bool {
        match (self.to_ratio(), other.to_ratio()) {
            (Ok(lhs), Ok(rhs)) => lhs == rhs,
            _ => self == other,
        }
    }

    pub fn to_ratio(&self) -> Result<Ratio<T>, FractionError> {
        if self.denominator.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Ratio::new_raw(self.numerator, self.denominator))
    }

    fn sign_normalized(numerator: T, denominator: T) -> Result<Self, FractionError> {
        if denominator < T::zero() {
            return Ok(Self {
                numerator: numerator.checked_neg().ok_or(FractionError::Overflow)?,
                denominator: denominator.checked_neg().ok_or(FractionError::Overflow)?,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    fn add_reduced(&self, other: &Self) -> Result<Self, FractionError> {
        let common_denominator = lcm(self.denominator, other.denominator)?;

        // `num * (common / den)` equals `num * common / den` without the wide
        // intermediate product
        let first_numerator = checked_product(
            self.numerator,
            checked_division(common_denominator, self.denominator)?,
        )?;
        let second_numerator = checked_product(
            other.numerator,
            checked_division(common_denominator, other.denominator)?,
        )?;

        let numerator = first_numerator
            .checked_add(&second_numerator)
            .ok_or(FractionError::Overflow)?;

        Self::lowest_terms(numerator, common_denominator)
    }

    fn mul_reduced(&self, other: &Self) -> Result<Self, FractionError> {
        // cancel across the operands first so representable products never
        // overflow on the way
        let first_divisor = gcd(self.numerator, other.denominator)?;
        let second_divisor = gcd(other.numerator, self.denominator)?;

        let numerator = checked_product(
            checked_division(self.numerator, first_divisor)?,
            checked_division(other.numerator, second_divisor)?,
        )?;
        let denominator = checked_product(
            checked_division(self.denominator, second_divisor)?,
            checked_division(other.denominator, first_divisor)?,
        )?;

        Self::lowest_terms(numerator, denominator)
    }

    fn lowest_terms(numerator: T, denominator: T) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        let divisor = gcd(numerator, denominator)?;
        Self::sign_normalized(
            checked_division(numerator, divisor)?,
            checked_division(denominator, divisor)?,
        )
    }
}

impl<T> Default for Fraction<T>
where
    T: Int,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> From<T> for Fraction<T>
where
    T: Int,
{
    fn from(integer: T) -> Self {
        Self::from_integer(integer)
    }
}

impl<T> TryFrom<(T, T)> for Fraction<T>
where
    T: Int,
{
    type Error = FractionError;

    fn try_from((numerator, denominator): (T, T)) -> Result<Self, Self::Error> {
        Self::try_new(numerator, denominator)
    }
}

impl<T> From<Ratio<T>> for Fraction<T>
where
    T: Int,
{
    fn from(ratio: Ratio<T>) -> Self {
        Self::new(*ratio.numer(), *ratio.denom())
    }
}

impl<T> Zero for Fraction<T>
where
    T: Int,
{
    #[inline]
    fn zero() -> Self {
        Self::from_integer(T::zero())
    }

    /// `0 / 0` has no value and is not zero.
    fn is_zero(&self) -> bool {
        self.numerator.is_zero() && !self.denominator.is_zero()
    }
}

impl<T> One for Fraction<T>
where
    T: Int,
{
    #[inline]
    fn one() -> Self {
        Self::from_integer(T::one())
    }
}

macro_rules! forward_binop {
    ($Op:ident, $op:ident, $method:ident) => {
        impl<T> $Op for Fraction<T>
        where
            T: Int,
        {
            type Output = Fraction<T>;

            fn $op(self, rhs: Self) -> Self::Output {
                $Op::$op(&self, &rhs)
            }
        }

        impl<T> $Op for &Fraction<T>
        where
            T: Int,
        {
            type Output = Fraction<T>;

            fn $op(self, rhs: Self) -> Self::Output {
                self.$method(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }
    };
}

forward_binop!(Add, add, added_by);
forward_binop!(Sub, sub, subtracted_by);
forward_binop!(Mul, mul, multiplied_by);
forward_binop!(Div, div, divided_by);

impl<T> Neg for Fraction<T>
where
    T: Int,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T> Neg for &Fraction<T>
where
    T: Int,
{
    type Output = Fraction<T>;

    fn neg(self) -> Self::Output {
        self.negate().unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> Sum for Fraction<T>
where
    T: Int,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |sum, el| sum + el)
    }
}

impl<T> Product for Fraction<T>
where
    T: Int,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |product, el| product * el)
    }
}

impl<T> fmt::Display for Fraction<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

impl<T> Serialize for Fraction<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.numerator, &self.denominator).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Fraction<T>
where
    T: Int + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (numerator, denominator) = <(T, T)>::deserialize(deserializer)?;
        Self::try_new(numerator, denominator).map_err(de::Error::custom)
    }
}
