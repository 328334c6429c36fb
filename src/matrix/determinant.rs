use fraction::{Fraction, Int};
use nalgebra::DMatrix;
use num_traits::{One, Zero};

use super::{Matrix, MatrixResult};

impl<T: Int> Matrix<T> {
    /// Determinant by cofactor expansion along the first row, `None` for a
    /// non-square matrix.
    pub fn determinant(&self) -> MatrixResult<Option<Fraction<T>>> {
        if !self.is_square() {
            return Ok(None);
        }
        self.cofactor_expansion().map(Some)
    }

    fn cofactor_expansion(&self) -> MatrixResult<Fraction<T>> {
        let entries = &self.entries;
        match self.nrows() {
            0 => Ok(Fraction::one()),
            1 => Ok(entries[(0, 0)]),
            2 => {
                let main = entries[(0, 0)].multiplied_by(&entries[(1, 1)])?;
                let anti = entries[(0, 1)].multiplied_by(&entries[(1, 0)])?;
                Ok(main.subtracted_by(&anti)?)
            }
            size => (0..size).try_fold(Fraction::zero(), |det, col| -> MatrixResult<_> {
                let minor = self.without_row_and_col(0, col).cofactor_expansion()?;
                let cofactor = if col % 2 == 0 { minor } else { minor.negate()? };
                Ok(det.added_by(&entries[(0, col)].multiplied_by(&cofactor)?)?)
            }),
        }
    }

    fn without_row_and_col(&self, row: usize, col: usize) -> Self {
        let skip = |index: usize, removed: usize| {
            if index < removed {
                index
            } else {
                index + 1
            }
        };
        Self {
            entries: DMatrix::from_fn(self.nrows() - 1, self.ncols() - 1, |i, j| {
                self.entries[(skip(i, row), skip(j, col))]
            }),
        }
    }
}
