use derive_more::{Display, Error, IsVariant};
use fraction::FractionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum MatrixError {
    #[display(fmt = "expected {} entries, got {}", expected, actual)]
    EntryCount { expected: usize, actual: usize },
    #[display(fmt = "shape {:?} does not match shape {:?}", left, right)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[display(fmt = "{}x{} matrix is not square", rows, cols)]
    NotSquare { rows: usize, cols: usize },
    #[display(fmt = "entry ({}, {}) is out of bounds", row, col)]
    OutOfBounds { row: usize, col: usize },
    #[display(fmt = "{}", _0)]
    Arithmetic(#[error(source)] FractionError),
}

impl From<FractionError> for MatrixError {
    fn from(err: FractionError) -> Self {
        Self::Arithmetic(err)
    }
}
