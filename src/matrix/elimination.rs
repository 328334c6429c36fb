use derive_new::new;
use fraction::{Fraction, Int};
use num_traits::Zero;

use crate::dbg_display;

use super::{Matrix, MatrixResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
struct Position {
    row: usize,
    col: usize,
}

/// Outcome of eliminating a matrix, optionally replaying the same row
/// operations on a companion matrix of equal height.
struct Elimination<T: Int> {
    reduced: Matrix<T>,
    companion: Option<Matrix<T>>,
    rank: usize,
}

impl<T: Int> Matrix<T> {
    /// Reduced row echelon form.
    pub fn rref(&self) -> MatrixResult<Self> {
        self.rref_with_rank().map(|(reduced, _)| reduced)
    }

    /// Number of pivot rows in the reduced row echelon form.
    pub fn rank(&self) -> MatrixResult<usize> {
        self.rref_with_rank().map(|(_, rank)| rank)
    }

    /// Reduced row echelon form and rank from a single elimination.
    pub fn rref_with_rank(&self) -> MatrixResult<(Self, usize)> {
        let Elimination { reduced, rank, .. } = self.lockstep_rref(None)?;
        Ok((dbg_display!(reduced), rank))
    }

    /// Inverse by Gauss-Jordan elimination against the identity, `None` when
    /// the matrix is singular.
    pub fn inverse(&self) -> MatrixResult<Option<Self>> {
        self.ensure_square()?;

        let identity = Self::identity(self.nrows());
        let Elimination {
            reduced, companion, ..
        } = self.lockstep_rref(Some(identity.clone()))?;

        if reduced != identity {
            log::debug!("Singular matrix, reduced form:\n{reduced}");
            return Ok(None);
        }
        Ok(companion)
    }

    fn lockstep_rref(&self, mut companion: Option<Self>) -> MatrixResult<Elimination<T>> {
        let mut reduced = self.clone();
        let mut search_from = Position::new(0, 0);
        let mut rank = 0;

        for current_row in 0..self.nrows().min(self.ncols()) {
            let Some(leading) = reduced.next_leading_position(search_from) else {
                break;
            };
            log::trace!("Pivot for row {current_row}: {leading:?}");

            reduced.entries.swap_rows(current_row, leading.row);
            if let Some(companion) = companion.as_mut() {
                companion.entries.swap_rows(current_row, leading.row);
            }

            let factor = reduced.entries[(current_row, leading.col)].reciprocal()?;
            reduced.scale_row(current_row, &factor)?;
            if let Some(companion) = companion.as_mut() {
                companion.scale_row(current_row, &factor)?;
            }

            for row in (0..self.nrows()).filter(|row| *row != current_row) {
                let row_factor = reduced.entries[(row, leading.col)].negate()?;
                reduced.add_multiple_of_row(row, &row_factor, current_row)?;
                if let Some(companion) = companion.as_mut() {
                    companion.add_multiple_of_row(row, &row_factor, current_row)?;
                }
            }

            rank += 1;
            search_from = Position::new(current_row + 1, leading.col + 1);
        }

        Ok(Elimination {
            reduced,
            companion,
            rank,
        })
    }

    /// First non-zero entry scanning columns left to right, then rows top to
    /// bottom, starting at `from`.
    fn next_leading_position(&self, from: Position) -> Option<Position> {
        (from.col..self.ncols()).find_map(|col| {
            (from.row..self.nrows())
                .find(|row| !self.entries[(*row, col)].is_zero())
                .map(|row| Position::new(row, col))
        })
    }

    fn scale_row(&mut self, row: usize, factor: &Fraction<T>) -> MatrixResult<()> {
        for col in 0..self.ncols() {
            self.entries[(row, col)] = factor.multiplied_by(&self.entries[(row, col)])?;
        }
        Ok(())
    }

    fn add_multiple_of_row(
        &mut self,
        target: usize,
        factor: &Fraction<T>,
        source: usize,
    ) -> MatrixResult<()> {
        for col in 0..self.ncols() {
            let scaled = factor.multiplied_by(&self.entries[(source, col)])?;
            self.entries[(target, col)] = self.entries[(target, col)].added_by(&scaled)?;
        }
        Ok(())
    }
}
