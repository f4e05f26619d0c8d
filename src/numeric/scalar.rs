// ============================================================================
// Scalar
// Integer-or-float number carried by a numeric value
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single numeric scalar, either an integer or a floating point number.
///
/// Integer arithmetic stays integral until it would overflow `i64`, at which
/// point the result is promoted to a float. Division always yields a float.
///
/// Equality and ordering compare numerically across representations, so
/// `Scalar::Integer(0) == Scalar::Float(0.0)`.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Scalar {
    /// Whole number
    Integer(i64),
    /// Floating point number
    Float(f64),
}

impl Scalar {
    /// Zero as an integer.
    pub const ZERO: Self = Scalar::Integer(0);

    /// Lossy conversion to `f64`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Integer(i) => i as f64,
            Scalar::Float(f) => f,
        }
    }

    /// Whether the scalar holds an integer.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Scalar::Integer(_))
    }

    /// Exactly zero, for both `0` and `0.0`.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Scalar::Integer(i) => i == 0,
            Scalar::Float(f) => f == 0.0,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        match self {
            Scalar::Integer(i) => i > 0,
            Scalar::Float(f) => f > 0.0,
        }
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            Scalar::Integer(i) => i < 0,
            Scalar::Float(f) => f < 0.0,
        }
    }

    /// Whether the scalar is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Scalar::Integer(_) => true,
            Scalar::Float(f) => f.is_finite(),
        }
    }

    /// Magnitude, keeping the representation.
    ///
    /// `i64::MIN` has no integer magnitude and is promoted to a float.
    pub fn abs(self) -> Self {
        match self {
            Scalar::Integer(i) => match i.checked_abs() {
                Some(abs) => Scalar::Integer(abs),
                None => promote("abs", (i as f64).abs()),
            },
            Scalar::Float(f) => Scalar::Float(f.abs()),
        }
    }

    /// Floating point division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Scalar::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Returns the lesser scalar, preferring `self` on ties.
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the greater scalar, preferring `self` on ties.
    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Exact decimal view of the scalar, using the shortest representation
    /// that round-trips a float. `None` for non-finite values and values
    /// outside the decimal range.
    pub(crate) fn to_decimal(self) -> Option<Decimal> {
        match self {
            Scalar::Integer(i) => Some(Decimal::from(i)),
            Scalar::Float(f) if f.is_finite() => Decimal::from_str(&f.to_string()).ok(),
            Scalar::Float(_) => None,
        }
    }
}

fn promote(op: &str, value: f64) -> Scalar {
    tracing::debug!(op, value, "integer overflow, promoting to float");
    Scalar::Float(value)
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a
                .checked_add(b)
                .map(Scalar::Integer)
                .unwrap_or_else(|| promote("add", a as f64 + b as f64)),
            _ => Scalar::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a
                .checked_sub(b)
                .map(Scalar::Integer)
                .unwrap_or_else(|| promote("sub", a as f64 - b as f64)),
            _ => Scalar::Float(self.as_f64() - rhs.as_f64()),
        }
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a
                .checked_mul(b)
                .map(Scalar::Integer)
                .unwrap_or_else(|| promote("mul", a as f64 * b as f64)),
            _ => Scalar::Float(self.as_f64() * rhs.as_f64()),
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Integer(a), Scalar::Integer(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                #[inline]
                fn from(value: $t) -> Self {
                    Scalar::Integer(i64::from(value))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Scalar::Integer)
            .unwrap_or(Scalar::Float(value as f64))
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        Scalar::from(value as u64)
    }
}

impl From<isize> for Scalar {
    fn from(value: isize) -> Self {
        Scalar::Integer(value as i64)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(f64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(i) => write!(f, "Integer({})", i),
            Scalar::Float(x) => write!(f, "Float({:?})", x),
        }
    }
}

/// Plain string coercion: integers as-is, floats in shortest round-trip
/// form (`3.0` renders as `3`).
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
        }
    }
}

impl FromStr for Scalar {
    type Err = NumericError;

    /// Parse a loose numeric literal.
    ///
    /// # Examples
    /// - " 42 " -> Integer(42)
    /// - "-1.5" -> Float(-1.5)
    /// - "1e3" -> Float(1000.0)
    /// - "inf", "abc", "" -> InvalidInput
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !is_numeric_literal(s) {
            return Err(NumericError::InvalidInput);
        }

        if let Ok(i) = s.parse::<i64>() {
            return Ok(Scalar::Integer(i));
        }

        s.parse::<f64>()
            .map(Scalar::Float)
            .map_err(|_| NumericError::InvalidInput)
    }
}

/// Sign, digits, optional fraction, optional exponent. At least one digit
/// must appear in the mantissa.
fn is_numeric_literal(s: &str) -> bool {
    let is_sign = |c: char| c == '+' || c == '-';
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let body = s.strip_prefix(is_sign).unwrap_or(s);
    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(is_sign).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_stays_integral() {
        let sum = Scalar::Integer(2) + Scalar::Integer(3);
        assert!(sum.is_integer());
        assert_eq!(sum, Scalar::Integer(5));

        let product = Scalar::Integer(4) * Scalar::Integer(-3);
        assert!(product.is_integer());
        assert_eq!(product, Scalar::Integer(-12));
    }

    #[test]
    fn test_mixed_arithmetic_is_float() {
        let sum = Scalar::Integer(2) + Scalar::Float(0.5);
        assert!(!sum.is_integer());
        assert_eq!(sum, Scalar::Float(2.5));
    }

    #[test]
    fn test_overflow_promotes_to_float() {
        let sum = Scalar::Integer(i64::MAX) + Scalar::Integer(1);
        assert!(!sum.is_integer());
        assert!(sum.as_f64() > 9.2e18);

        let diff = Scalar::Integer(i64::MIN) - Scalar::Integer(1);
        assert!(!diff.is_integer());

        let abs = Scalar::Integer(i64::MIN).abs();
        assert!(!abs.is_integer());
        assert!(abs.is_positive());
    }

    #[test]
    fn test_checked_div() {
        let q = Scalar::Integer(10).checked_div(Scalar::Integer(4)).unwrap();
        assert_eq!(q, Scalar::Float(2.5));

        let exact = Scalar::Integer(10).checked_div(Scalar::Integer(2)).unwrap();
        assert!(!exact.is_integer());

        assert_eq!(
            Scalar::Integer(1).checked_div(Scalar::Integer(0)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            Scalar::Float(1.0).checked_div(Scalar::Float(-0.0)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_cross_representation_comparison() {
        assert_eq!(Scalar::Integer(0), Scalar::Float(0.0));
        assert!(Scalar::Integer(1) < Scalar::Float(1.5));
        assert_eq!(Scalar::Integer(3).min(Scalar::Float(2.0)), Scalar::Float(2.0));
        assert!(Scalar::Integer(3).max(Scalar::Float(2.0)).is_integer());
    }

    #[test]
    fn test_classification() {
        assert!(Scalar::Integer(0).is_zero());
        assert!(Scalar::Float(0.0).is_zero());
        assert!(!Scalar::Float(0.0001).is_zero());
        assert!(Scalar::Float(-0.5).is_negative());
        assert!(Scalar::Integer(7).is_positive());
        assert!(!Scalar::Float(f64::NAN).is_positive());
        assert!(!Scalar::Float(f64::NAN).is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::Integer(42).to_string(), "42");
        assert_eq!(Scalar::Float(3.0).to_string(), "3");
        assert_eq!(Scalar::Float(3.5).to_string(), "3.5");
        assert_eq!(Scalar::Float(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("42".parse::<Scalar>().unwrap(), Scalar::Integer(42));
        assert!(" 42 ".parse::<Scalar>().unwrap().is_integer());
        assert_eq!("+7".parse::<Scalar>().unwrap(), Scalar::Integer(7));
        assert_eq!("-1.5".parse::<Scalar>().unwrap(), Scalar::Float(-1.5));
        assert_eq!(".5".parse::<Scalar>().unwrap(), Scalar::Float(0.5));
        assert_eq!("1e3".parse::<Scalar>().unwrap(), Scalar::Float(1000.0));
        assert_eq!("2.5E-1".parse::<Scalar>().unwrap(), Scalar::Float(0.25));
    }

    #[test]
    fn test_from_str_invalid() {
        for input in ["", "abc", "1.2.3", "inf", "NaN", ".", "-", "1e", "1e+", "12abc", "0x10"] {
            assert_eq!(
                input.parse::<Scalar>(),
                Err(NumericError::InvalidInput),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_to_decimal_uses_shortest_representation() {
        assert_eq!(Scalar::Float(0.1).to_decimal().unwrap().to_string(), "0.1");
        assert_eq!(Scalar::Integer(-12).to_decimal().unwrap().to_string(), "-12");
        assert!(Scalar::Float(f64::INFINITY).to_decimal().is_none());
        assert!(Scalar::Float(1e300).to_decimal().is_none());
    }

    #[test]
    fn test_from_unsigned() {
        assert_eq!(Scalar::from(5u64), Scalar::Integer(5));
        assert!(!Scalar::from(u64::MAX).is_integer());
    }
}
