use pretty_assertions::{assert_eq, assert_str_eq};
use proptest::prelude::*;

use super::*;

fn matrix(nrows: usize, ncols: usize, entries: &[i32]) -> Matrix<i32> {
    Matrix::new(
        nrows,
        ncols,
        entries.iter().copied().map(Fraction::from_integer).collect(),
    )
    .unwrap()
}

fn fractions(nrows: usize, ncols: usize, entries: &[(i32, i32)]) -> Matrix<i32> {
    Matrix::new(
        nrows,
        ncols,
        entries
            .iter()
            .map(|&(numerator, denominator)| Fraction::new(numerator, denominator))
            .collect(),
    )
    .unwrap()
}

#[test]
fn new_checks_entry_count() {
    assert_eq!(
        Matrix::<i32>::new(2, 2, vec![Fraction::one(); 3]),
        Err(MatrixError::EntryCount {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn entries_are_row_major() {
    let m = matrix(2, 3, &[1, 2, 3, 4, 5, 6]);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m[(0, 2)], Fraction::new(3, 1));
    assert_eq!(m[(1, 0)], Fraction::new(4, 1));
    assert_eq!(m.get(1, 2), Some(&Fraction::new(6, 1)));
    assert_eq!(m.get(2, 0), None);
}

#[test]
fn with_entry_copies() {
    let m = Matrix::<i32>::zero(2, 2);
    let changed = m.with_entry(1, 0, Fraction::new(1, 2)).unwrap();
    assert_eq!(changed[(1, 0)], Fraction::new(1, 2));
    assert_eq!(m, Matrix::zero(2, 2));
    assert_eq!(
        m.with_entry(2, 0, Fraction::one()),
        Err(MatrixError::OutOfBounds { row: 2, col: 0 })
    );
}

#[test]
fn identity_has_unit_diagonal() {
    assert_eq!(Matrix::<i32>::identity(2), matrix(2, 2, &[1, 0, 0, 1]));
}

#[test]
fn addition_and_subtraction() {
    let lhs = matrix(2, 2, &[1, 2, 3, 4]);
    let rhs = matrix(2, 2, &[4, 3, 2, 1]);
    assert_eq!(lhs.added_by(&rhs), Ok(matrix(2, 2, &[5, 5, 5, 5])));
    assert_eq!(lhs.subtracted_by(&rhs), Ok(matrix(2, 2, &[-3, -1, 1, 3])));

    let halves = fractions(1, 2, &[(1, 2), (1, 3)]);
    assert_eq!(
        halves.added_by(&halves),
        Ok(fractions(1, 2, &[(1, 1), (2, 3)]))
    );
}

#[test]
fn shape_mismatch_is_rejected() {
    let lhs = matrix(2, 2, &[1, 2, 3, 4]);
    let rhs = matrix(2, 3, &[1, 2, 3, 4, 5, 6]);
    let expected = Err(MatrixError::DimensionMismatch {
        left: (2, 2),
        right: (2, 3),
    });
    assert_eq!(lhs.added_by(&rhs), expected);
    assert_eq!(lhs.subtracted_by(&rhs), expected);
}

#[test]
fn negate_flips_every_entry() {
    let m = fractions(1, 3, &[(1, 2), (0, 1), (-3, 4)]);
    assert_eq!(m.negate(), Ok(fractions(1, 3, &[(-1, 2), (0, 1), (3, 4)])));
}

#[test]
fn arithmetic_errors_propagate() {
    let m = Matrix::<i8>::new(1, 1, vec![Fraction::from_integer(100)]).unwrap();
    assert_eq!(
        m.added_by(&m),
        Err(MatrixError::Arithmetic(FractionError::Overflow))
    );
}

#[test]
fn rref_of_invertible_is_identity() {
    let m = matrix(2, 2, &[2, 4, 1, 3]);
    assert_eq!(m.rref(), Ok(Matrix::identity(2)));
}

#[test]
fn rref_keeps_dependent_rows_zero() {
    let m = matrix(2, 3, &[1, 2, 3, 2, 4, 6]);
    assert_eq!(m.rref(), Ok(matrix(2, 3, &[1, 2, 3, 0, 0, 0])));
}

#[test]
fn rref_swaps_rows_up() {
    let m = matrix(3, 3, &[0, 0, 2, 0, 3, 0, 4, 0, 0]);
    assert_eq!(m.rref(), Ok(Matrix::identity(3)));
}

#[test]
fn rref_skips_empty_columns() {
    let m = matrix(2, 3, &[0, 2, 4, 0, 1, 3]);
    assert_eq!(m.rref(), Ok(matrix(2, 3, &[0, 1, 0, 0, 0, 1])));
}

#[test]
fn inverse_of_invertible() {
    let m = matrix(2, 2, &[4, 7, 2, 6]);
    let inverse = m.inverse().unwrap().unwrap();
    assert_eq!(
        inverse,
        fractions(2, 2, &[(3, 5), (-7, 10), (-1, 5), (2, 5)])
    );
    assert_eq!(inverse.inverse(), Ok(Some(m)));
}

#[test]
fn inverse_of_permutation() {
    let m = matrix(2, 2, &[0, 1, 1, 0]);
    assert_eq!(m.inverse(), Ok(Some(m.clone())));
}

#[test]
fn singular_matrix_has_no_inverse() {
    assert_eq!(matrix(2, 2, &[1, 2, 2, 4]).inverse(), Ok(None));
    assert_eq!(Matrix::<i32>::zero(3, 3).inverse(), Ok(None));
}

#[test]
fn inverse_requires_square() {
    assert_eq!(
        matrix(2, 3, &[1, 2, 3, 4, 5, 6]).inverse(),
        Err(MatrixError::NotSquare { rows: 2, cols: 3 })
    );
}

#[test]
fn rank_counts_pivots() {
    assert_eq!(matrix(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).rank(), Ok(2));
    assert_eq!(Matrix::<i32>::identity(4).rank(), Ok(4));
    assert_eq!(Matrix::<i32>::zero(2, 5).rank(), Ok(0));
    assert_eq!(matrix(3, 1, &[0, 0, 7]).rank(), Ok(1));
}

#[test]
fn rref_with_rank_agrees_with_rref_and_rank() {
    let m = matrix(3, 4, &[1, 2, 3, 4, 2, 4, 6, 8, 0, 1, 1, 1]);
    let (reduced, rank) = m.rref_with_rank().unwrap();
    assert_eq!(Ok(reduced), m.rref());
    assert_eq!(Ok(rank), m.rank());
    assert_eq!(rank, 2);
}

#[test]
fn entry_without_denominator_fails_elimination() {
    let m = fractions(2, 2, &[(0, 0), (1, 1), (1, 1), (0, 1)]);
    let expected = Err(MatrixError::Arithmetic(FractionError::ZeroDenominator));
    assert_eq!(m.rref(), expected);
    assert_eq!(m.rank(), expected.clone().map(|_: Matrix<i32>| 0));
    assert_eq!(m.inverse(), expected.map(|_: Matrix<i32>| None));
}

#[test]
fn determinant_by_cofactors() {
    assert_eq!(
        matrix(2, 2, &[1, 2, 3, 4]).determinant(),
        Ok(Some(Fraction::new(-2, 1)))
    );
    assert_eq!(
        matrix(3, 3, &[6, 1, 1, 4, -2, 5, 2, 8, 7]).determinant(),
        Ok(Some(Fraction::new(-306, 1)))
    );
    assert_eq!(
        fractions(2, 2, &[(1, 2), (1, 3), (1, 4), (1, 5)]).determinant(),
        Ok(Some(Fraction::new(1, 60)))
    );
    assert_eq!(
        matrix(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).determinant(),
        Ok(Some(Fraction::new(0, 1)))
    );
}

#[test]
fn determinant_of_small_matrices() {
    assert_eq!(
        fractions(1, 1, &[(10, 6)]).determinant(),
        Ok(Some(Fraction::new(10, 6)))
    );
    assert_eq!(
        Matrix::<i32>::zero(0, 0).determinant(),
        Ok(Some(Fraction::one()))
    );
}

#[test]
fn determinant_of_non_square_is_none() {
    assert_eq!(matrix(1, 2, &[1, 2]).determinant(), Ok(None));
}

#[test]
fn displays_rows() {
    let m = fractions(2, 2, &[(1, 2), (-3, 4), (5, 1), (0, 1)]);
    assert_str_eq!(m.to_string(), "1 / 2  -3 / 4\n5 / 1  0 / 1\n");
}

proptest! {
    #[test]
    fn invertible_iff_determinant_non_zero(entries in prop::collection::vec(-20i32..20, 4)) {
        let m = matrix(2, 2, &entries);
        let determinant = m.determinant().unwrap().unwrap();
        let inverse = m.inverse().unwrap();

        prop_assert_eq!(inverse.is_some(), !determinant.is_zero());
        prop_assert_eq!(m.rank().unwrap() == 2, !determinant.is_zero());
    }

    #[test]
    fn subtraction_undoes_addition(
        lhs in prop::collection::vec(-1000i32..1000, 6),
        rhs in prop::collection::vec(-1000i32..1000, 6),
    ) {
        let lhs = matrix(2, 3, &lhs);
        let rhs = matrix(2, 3, &rhs);
        prop_assert_eq!(lhs.added_by(&rhs).unwrap().subtracted_by(&rhs), Ok(lhs));
    }
}
