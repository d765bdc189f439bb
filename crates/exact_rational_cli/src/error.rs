//! Error types for the command-line front-end

use exact_rational_core::RationalError;
use num_bigint::ParseBigIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Rational(#[from] RationalError),

    #[error("invalid integer '{input}': {source}")]
    Integer {
        input: String,
        #[source]
        source: ParseBigIntError,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;
