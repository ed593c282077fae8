//! Exact rational coefficients.
//!
//! Every sequence coefficient is a `Coeff`: an arbitrary precision rational
//! kept in lowest terms with a positive denominator. Integers are simply
//! rationals with denominator 1, so integer sequences stay exact through
//! division and the inverse signature function.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::{Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::float::FloatCore;
use num_traits::{One, Zero};

use crate::error::{Result, SnrError};
use crate::traits::{NearRing, Ring};

/// An exact rational coefficient.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coeff(RBig);

impl Coeff {
    /// The coefficient 0.
    pub const ZERO: Self = Self(RBig::ZERO);

    /// The coefficient 1.
    pub const ONE: Self = Self(RBig::ONE);

    /// Creates a coefficient from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let den = IBig::from(denominator);
        let num = if den.is_negative() {
            -IBig::from(numerator)
        } else {
            IBig::from(numerator)
        };
        Self(RBig::from_parts(num, den.unsigned_abs()))
    }

    /// Creates an integer coefficient.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Converts a float to the exact rational it encodes.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperand` for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !FloatCore::is_finite(value) {
            return Err(SnrError::UnsupportedOperand(format!(
                "non-finite number {value}"
            )));
        }

        let (mantissa, exponent, sign) = FloatCore::integer_decode(value);
        let mut num = IBig::from(mantissa);
        if sign < 0 {
            num = -num;
        }

        let shift = usize::from(exponent.unsigned_abs());
        let inner = if exponent >= 0 {
            RBig::from(num * IBig::from(2u8).pow(shift))
        } else {
            RBig::from_parts(num, UBig::from(2u8).pow(shift))
        };
        Ok(Self(inner))
    }

    /// Returns true if this is 0.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if this is 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> IBig {
        self.0.numerator().clone()
    }

    /// Returns the (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> IBig {
        IBig::from(self.0.denominator().clone())
    }

    /// Converts to an i64 if this is an integer that fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numerator().try_into().ok()
        } else {
            None
        }
    }

    /// Divides, returning `None` when the divisor is zero.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &rhs.0))
        }
    }

    /// Floor modulo by an integer: the result lies in `[0, m)` for positive
    /// `m` and in `(m, 0]` for negative `m`.
    ///
    /// For a rational `p/q` this is `(p mod q·m) / q`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionUndefined` when `m` is zero.
    pub fn modulo(&self, m: i64) -> Result<Self> {
        if m == 0 {
            return Err(SnrError::DivisionUndefined);
        }

        let den = self.0.denominator().clone();
        let modulus = IBig::from(den.clone()) * IBig::from(m);
        let mut rem = self.numerator() % &modulus;
        if !rem.is_zero() && (rem.is_negative() != (m < 0)) {
            rem = rem + &modulus;
        }
        Ok(Self(RBig::from_parts(rem, den)))
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

/// Parses an optionally signed run of decimal digits.
fn parse_digits(s: &str) -> Option<IBig> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    IBig::from_str_radix(s, 10).ok()
}

impl FromStr for Coeff {
    type Err = SnrError;

    /// Accepts integers (`-3`), fractions (`2/3`) and decimals (`1.25`).
    fn from_str(s: &str) -> Result<Self> {
        let unsupported = || SnrError::UnsupportedOperand(format!("not a number: {s:?}"));

        let trimmed = s.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let value = if let Some((num, den)) = body.split_once('/') {
            let num = parse_digits(num).ok_or_else(unsupported)?;
            let den = parse_digits(den).ok_or_else(unsupported)?;
            if den.is_zero() {
                return Err(SnrError::DivisionUndefined);
            }
            RBig::from_parts(num, den.unsigned_abs())
        } else if let Some((int, frac)) = body.split_once('.') {
            if int.is_empty() && frac.is_empty() {
                return Err(unsupported());
            }
            let int = if int.is_empty() { "0" } else { int };
            let frac_digits = if frac.is_empty() { "0" } else { frac };
            let num = parse_digits(&format!("{int}{frac_digits}")).ok_or_else(unsupported)?;
            let scale = UBig::from(10u8).pow(frac_digits.len());
            RBig::from_parts(num, scale)
        } else {
            RBig::from(parse_digits(body).ok_or_else(unsupported)?)
        };

        Ok(Self(if negative { -value } else { value }))
    }
}

impl Zero for Coeff {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Coeff {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl NearRing for Coeff {}
impl Ring for Coeff {}

impl fmt::Debug for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coeff({self})")
    }
}

impl fmt::Display for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

// Arithmetic operations
impl Add for Coeff {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Coeff> for Coeff {
    type Output = Self;

    fn add(self, rhs: &Coeff) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Coeff {
    type Output = Coeff;

    fn add(self, rhs: Self) -> Self::Output {
        Coeff(&self.0 + &rhs.0)
    }
}

impl Sub for Coeff {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Coeff> for Coeff {
    type Output = Self;

    fn sub(self, rhs: &Coeff) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Coeff {
    type Output = Coeff;

    fn sub(self, rhs: Self) -> Self::Output {
        Coeff(&self.0 - &rhs.0)
    }
}

impl Mul for Coeff {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Coeff> for Coeff {
    type Output = Self;

    fn mul(self, rhs: &Coeff) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Coeff {
    type Output = Coeff;

    fn mul(self, rhs: Self) -> Self::Output {
        Coeff(&self.0 * &rhs.0)
    }
}

/// # Panics
///
/// Panics on a zero divisor; use [`Coeff::checked_div`] when the divisor
/// is not known to be non-zero.
impl Div for Coeff {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Coeff> for Coeff {
    type Output = Self;

    fn div(self, rhs: &Coeff) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Neg for Coeff {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Coeff {
    type Output = Coeff;

    fn neg(self) -> Self::Output {
        Coeff(-&self.0)
    }
}

impl From<i64> for Coeff {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<i32> for Coeff {
    fn from(n: i32) -> Self {
        Self::from_i64(i64::from(n))
    }
}

impl From<IBig> for Coeff {
    fn from(n: IBig) -> Self {
        Self(RBig::from(n))
    }
}

impl From<RBig> for Coeff {
    fn from(r: RBig) -> Self {
        Self(r)
    }
}

impl TryFrom<f64> for Coeff {
    type Error = SnrError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}
