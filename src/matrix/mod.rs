mod determinant;
mod elimination;
mod error;
#[cfg(test)]
mod tests;

use std::{fmt, ops::Index};

use fraction::{Fraction, FractionError, Int};
use nalgebra::DMatrix;
use num_traits::{One, Zero};

use crate::ensure_same_shape;

pub use error::MatrixError;

pub type MatrixResult<T> = Result<T, MatrixError>;

/// Rectangular grid of fractions.
///
/// Every operation returns a new matrix; entries are combined with the
/// checked fraction arithmetic, so a failing entry fails the whole operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Int> {
    entries: DMatrix<Fraction<T>>,
}

impl<T: Int> Matrix<T> {
    /// Builds a matrix from row-major entries.
    pub fn new(nrows: usize, ncols: usize, entries: Vec<Fraction<T>>) -> MatrixResult<Self> {
        let expected = nrows * ncols;
        if entries.len() != expected {
            return Err(MatrixError::EntryCount {
                expected,
                actual: entries.len(),
            });
        }
        Ok(Self {
            entries: DMatrix::from_row_slice(nrows, ncols, &entries),
        })
    }

    pub fn zero(nrows: usize, ncols: usize) -> Self {
        Self {
            entries: DMatrix::from_element(nrows, ncols, Fraction::zero()),
        }
    }

    pub fn identity(size: usize) -> Self {
        Self {
            entries: DMatrix::from_fn(size, size, |i, j| {
                if i == j {
                    Fraction::one()
                } else {
                    Fraction::zero()
                }
            }),
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.entries.nrows()
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.entries.ncols()
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.entries.shape()
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Fraction<T>> {
        self.entries.get((row, col))
    }

    /// Copy of the matrix with one entry replaced.
    pub fn with_entry(&self, row: usize, col: usize, value: Fraction<T>) -> MatrixResult<Self> {
        if row >= self.nrows() || col >= self.ncols() {
            return Err(MatrixError::OutOfBounds { row, col });
        }
        let mut result = self.clone();
        result.entries[(row, col)] = value;
        Ok(result)
    }

    pub fn added_by(&self, other: &Self) -> MatrixResult<Self> {
        ensure_same_shape!(self, other);
        self.zip_entries(other, Fraction::added_by)
    }

    pub fn subtracted_by(&self, other: &Self) -> MatrixResult<Self> {
        ensure_same_shape!(self, other);
        self.added_by(&other.negate()?)
    }

    /// Multiplies every entry by `-1`.
    pub fn negate(&self) -> MatrixResult<Self> {
        let minus_one = Fraction::from_integer(-T::one());
        self.map_entries(|entry| minus_one.multiplied_by(entry))
    }

    fn map_entries<F>(&self, f: F) -> MatrixResult<Self>
    where
        F: Fn(&Fraction<T>) -> Result<Fraction<T>, FractionError>,
    {
        let entries = self.entries.iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            entries: DMatrix::from_vec(self.nrows(), self.ncols(), entries),
        })
    }

    fn zip_entries<F>(&self, other: &Self, f: F) -> MatrixResult<Self>
    where
        F: Fn(&Fraction<T>, &Fraction<T>) -> Result<Fraction<T>, FractionError>,
    {
        // both iterators are column-major, as is `from_vec`
        let entries = self
            .entries
            .iter()
            .zip(other.entries.iter())
            .map(|(lhs, rhs)| f(lhs, rhs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            entries: DMatrix::from_vec(self.nrows(), self.ncols(), entries),
        })
    }

    fn ensure_square(&self) -> MatrixResult<()> {
        if !self.is_square() {
            let (rows, cols) = self.shape();
            return Err(MatrixError::NotSquare { rows, cols });
        }
        Ok(())
    }
}

impl<T: Int> Index<(usize, usize)> for Matrix<T> {
    type Output = Fraction<T>;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.entries[index]
    }
}

impl<T: Int> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.entries.row_iter() {
            let line = row
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
