mod error;
mod fraction;
pub mod helpers;
mod int;

pub use error::FractionError;
pub use fraction::Fraction;
pub use int::Int;

pub type Fraction32 = Fraction<i32>;
pub type Fraction64 = Fraction<i64>;
