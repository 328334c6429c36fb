mod helpers;
pub mod matrix;

pub use fraction::{Fraction, Fraction32, Fraction64, FractionError};
pub use matrix::{Matrix, MatrixError, MatrixResult};
