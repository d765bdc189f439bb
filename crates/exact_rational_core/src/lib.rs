//! Exact Rational Core Library
//!
//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! # Overview
//!
//! A [`Rational`] is an immutable numerator/denominator pair of `BigInt`s,
//! always kept in lowest terms with a positive denominator. Arithmetic never
//! rounds; the only lossy operations are the machine-number approximations in
//! [`convert`].
//!
//! # Key Components
//!
//! - [`rational`] - The `Rational` value type and its operators
//! - [`convert`] - Float approximation and truncating integer conversion
//! - [`error`] - Construction and division failures
//!
//! # Example
//! ```
//! use exact_rational_core::Rational;
//! use num_bigint::BigInt;
//!
//! let a = Rational::new(BigInt::from(1), BigInt::from(2)).unwrap();
//! let b = Rational::new(BigInt::from(1), BigInt::from(3)).unwrap();
//! assert_eq!((a + b).to_string(), "5/6");
//! ```

pub mod convert;
pub mod error;
mod fmt;
pub mod rational;

pub use convert::ApproxNumber;
pub use error::{RationalError, Result};
pub use rational::Rational;
