//! Error types for rational arithmetic

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalError {
    /// A rational was constructed with a zero denominator
    #[error("denominator cannot be zero")]
    InvalidDenominator,

    /// The divisor (or the value being inverted) is zero
    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, RationalError>;
