use derive_more::{Display, Error, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, IsVariant)]
pub enum FractionError {
    #[display(fmt = "denominator == 0")]
    ZeroDenominator,
    #[display(fmt = "integer overflow")]
    Overflow,
}
