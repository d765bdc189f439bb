//! Exact rational number type
//!
//! A rational number over `BigInt`, kept in lowest terms with a strictly
//! positive denominator so that every value has exactly one representation.

use crate::error::{RationalError, Result};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

/// Exact rational number (numerator / denominator)
///
/// Values are immutable: arithmetic always returns a freshly normalized
/// instance. Division can fail, so it is exposed as [`Rational::checked_div`]
/// instead of the `/` operator.
#[derive(Clone)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Create a new rational number from numerator and denominator
    ///
    /// The sign is moved onto the numerator and the fraction is reduced to
    /// lowest terms.
    ///
    /// # Errors
    /// [`RationalError::InvalidDenominator`] if `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            log::debug!("rejecting rational {}/0", num);
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Self::reduced(num, den))
    }

    /// Create a rational from an integer
    pub fn from_integer<T: Into<BigInt>>(n: T) -> Self {
        Self {
            numerator: n.into(),
            denominator: BigInt::one(),
        }
    }

    /// Normalize `num/den`. Every constructor and operator funnels through here.
    ///
    /// `den` must be non-zero.
    fn reduced(mut num: BigInt, mut den: BigInt) -> Self {
        debug_assert!(!den.is_zero());

        if den.is_negative() {
            num = -num;
            den = -den;
        }

        // gcd(0, den) == den, so zero collapses to 0/1
        let g = num.gcd(&den);
        if !g.is_one() {
            log::trace!("reducing {}/{} by {}", num, den, g);
            num /= &g;
            den /= &g;
        }

        Self {
            numerator: num,
            denominator: den,
        }
    }

    /// Numerator in lowest terms; carries the sign
    pub fn numer(&self) -> &BigInt {
        &self.numerator
    }

    /// Denominator in lowest terms; always positive
    pub fn denom(&self) -> &BigInt {
        &self.denominator
    }

    /// Consume the value and return `(numerator, denominator)`
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// True if the denominator is 1
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Sign of the value, as reported by the numerator
    pub fn sign(&self) -> Sign {
        self.numerator.sign()
    }

    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Divide by another rational
    ///
    /// # Errors
    /// [`RationalError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Rational) -> Result<Rational> {
        if other.numerator.is_zero() {
            log::debug!("refusing to divide {} by zero", self);
            return Err(RationalError::DivisionByZero);
        }

        let num = &self.numerator * &other.denominator;
        let den = &self.denominator * &other.numerator;
        Ok(Self::reduced(num, den))
    }

    /// Multiplicative inverse
    ///
    /// # Errors
    /// [`RationalError::DivisionByZero`] if `self` is zero.
    pub fn recip(&self) -> Result<Rational> {
        if self.numerator.is_zero() {
            log::debug!("zero has no reciprocal");
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(self.denominator.clone(), self.numerator.clone()))
    }

    /// Raise to an integer power; negative exponents invert first
    ///
    /// # Errors
    /// [`RationalError::DivisionByZero`] for zero raised to a negative power.
    pub fn pow(&self, exp: i32) -> Result<Rational> {
        let base = if exp < 0 { self.recip()? } else { self.clone() };
        let e = exp.unsigned_abs();
        Ok(Self::reduced(base.numerator.pow(e), base.denominator.pow(e)))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl TryFrom<(BigInt, BigInt)> for Rational {
    type Error = RationalError;

    fn try_from((num, den): (BigInt, BigInt)) -> Result<Self> {
        Self::new(num, den)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            numerator: BigInt::one(),
            denominator: BigInt::one(),
        }
    }
}

// Equality and ordering look at the difference rather than the fields.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        (self - other).numerator.is_zero()
    }
}

impl Eq for Rational {}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self - other).numerator.sign() {
            Sign::Minus => Ordering::Less,
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => Ordering::Greater,
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, other: Self) -> Rational {
        let num = &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let den = &self.denominator * &other.denominator;
        Rational::reduced(num, den)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, other: Self) -> Rational {
        let num = &self.numerator * &other.denominator - &other.numerator * &self.denominator;
        let den = &self.denominator * &other.denominator;
        Rational::reduced(num, den)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, other: Self) -> Rational {
        let num = &self.numerator * &other.numerator;
        let den = &self.denominator * &other.denominator;
        Rational::reduced(num, den)
    }
}

/// Forward owned and mixed operand forms to the `&Rational op &Rational` impl
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp for Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Rational {
                (&self).$method(&other)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, other: &Rational) -> Rational {
                (&self).$method(other)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Rational {
                self.$method(&other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}
