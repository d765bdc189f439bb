//! Lossy numeric conversions
//!
//! Floating-point approximations and float-routed integer truncation. None
//! of these are exact; they exist for display, plotting and interop with
//! code that only speaks machine numbers.

use crate::Rational;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

/// An ordered numeric value that can be approximated by machine numbers
pub trait ApproxNumber: Ord {
    /// Nearest-effort `f64` approximation
    fn to_f64(&self) -> f64;

    fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Truncate toward zero through the `f64` approximation
    ///
    /// Values above `i64::MAX` clamp to `i64::MAX`.
    fn truncate_to_i64(&self) -> i64 {
        let approx = self.to_f64();
        if approx > i64::MAX as f64 {
            i64::MAX
        } else {
            approx as i64
        }
    }

    /// Truncate toward zero through the `f64` approximation
    ///
    /// Values above `i32::MAX` clamp to `i32::MAX`.
    fn truncate_to_i32(&self) -> i32 {
        let approx = self.to_f64();
        if approx > i32::MAX as f64 {
            i32::MAX
        } else {
            approx as i32
        }
    }
}

fn big_to_f64(n: &BigInt) -> f64 {
    // num-bigint saturates to infinity, but keep the sign if that ever changes
    n.to_f64().unwrap_or(if n.is_negative() {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    })
}

impl ApproxNumber for Rational {
    fn to_f64(&self) -> f64 {
        big_to_f64(self.numer()) / big_to_f64(self.denom())
    }
}
