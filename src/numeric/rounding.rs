// ============================================================================
// Rounding
// Tie-breaking modes and decimal rounding of scalars
// ============================================================================

use super::scalar::Scalar;
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits a decimal can carry.
pub(crate) const MAX_SCALE: u32 = 28;

/// How a value exactly halfway between two candidates is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Ties away from zero: 2.5 -> 3, -2.5 -> -3
    #[default]
    HalfUp,
    /// Ties toward zero: 2.5 -> 2, -2.5 -> -2
    HalfDown,
    /// Ties to the even neighbour: 2.5 -> 2, 3.5 -> 4
    HalfEven,
    /// Ties to the odd neighbour: 2.5 -> 3, 3.5 -> 3
    HalfOdd,
}

/// Round `value` to `precision` fractional digits.
///
/// Negative precision rounds to tens, hundreds and so on. The rounding is
/// carried out on the shortest decimal form of the value, so `1.955` rounds
/// to `1.96` at two places even though its binary form is slightly below.
/// Values the decimal type cannot hold fall back to binary rounding.
pub(crate) fn round_scalar(value: Scalar, precision: i32, mode: RoundingMode) -> f64 {
    value
        .to_decimal()
        .and_then(|d| round_decimal(d, precision, mode))
        .and_then(|d| d.to_string().parse::<f64>().ok())
        .unwrap_or_else(|| round_binary(value.as_f64(), precision, mode))
}

/// Decimal rounding; `None` when an intermediate step overflows.
pub(crate) fn round_decimal(value: Decimal, precision: i32, mode: RoundingMode) -> Option<Decimal> {
    if precision >= 0 {
        let places = precision as u32;
        if places >= MAX_SCALE {
            return Some(value);
        }
        return Some(round_dp(value, places, mode));
    }

    let shift = precision.unsigned_abs();
    if shift > MAX_SCALE {
        return Some(Decimal::ZERO);
    }
    let factor = Decimal::try_from_i128_with_scale(10i128.pow(shift), 0).ok()?;
    let scaled = value.checked_div(factor)?;
    round_dp(scaled, 0, mode).checked_mul(factor)
}

fn round_dp(value: Decimal, places: u32, mode: RoundingMode) -> Decimal {
    match mode {
        RoundingMode::HalfUp => {
            value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
        },
        RoundingMode::HalfDown => {
            value.round_dp_with_strategy(places, RoundingStrategy::MidpointTowardZero)
        },
        RoundingMode::HalfEven => {
            value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
        },
        RoundingMode::HalfOdd => round_half_odd(value, places),
    }
}

fn round_half_odd(value: Decimal, places: u32) -> Decimal {
    let toward = value.round_dp_with_strategy(places, RoundingStrategy::MidpointTowardZero);
    let away = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    if toward == away {
        return toward;
    }

    // A tie: keep whichever neighbour ends in an odd digit.
    let mut last_kept = toward;
    last_kept.rescale(places);
    if last_kept.mantissa() % 2 != 0 {
        toward
    } else {
        away
    }
}

fn round_binary(value: f64, precision: i32, mode: RoundingMode) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(precision);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }

    let truncated = scaled.trunc();
    let is_tie = (scaled - truncated).abs() == 0.5;
    let rounded = match mode {
        RoundingMode::HalfUp => scaled.round(),
        RoundingMode::HalfEven => scaled.round_ties_even(),
        RoundingMode::HalfDown if is_tie => truncated,
        RoundingMode::HalfOdd if is_tie => {
            if truncated % 2.0 != 0.0 {
                truncated
            } else {
                truncated + scaled.signum()
            }
        },
        RoundingMode::HalfDown | RoundingMode::HalfOdd => scaled.round(),
    };
    rounded / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(value: f64, precision: i32, mode: RoundingMode) -> f64 {
        round_scalar(Scalar::Float(value), precision, mode)
    }

    #[test]
    fn test_half_up() {
        assert_eq!(round(2.5, 0, RoundingMode::HalfUp), 3.0);
        assert_eq!(round(-2.5, 0, RoundingMode::HalfUp), -3.0);
        assert_eq!(round(1.955, 2, RoundingMode::HalfUp), 1.96);
        assert_eq!(round(3.105, 2, RoundingMode::HalfUp), 3.11);
        assert_eq!(round(1.2345, 3, RoundingMode::HalfUp), 1.235);
    }

    #[test]
    fn test_half_down() {
        assert_eq!(round(2.5, 0, RoundingMode::HalfDown), 2.0);
        assert_eq!(round(-2.5, 0, RoundingMode::HalfDown), -2.0);
        assert_eq!(round(2.51, 0, RoundingMode::HalfDown), 3.0);
        assert_eq!(round(1.955, 2, RoundingMode::HalfDown), 1.95);
    }

    #[test]
    fn test_half_even() {
        assert_eq!(round(2.5, 0, RoundingMode::HalfEven), 2.0);
        assert_eq!(round(3.5, 0, RoundingMode::HalfEven), 4.0);
        assert_eq!(round(-2.5, 0, RoundingMode::HalfEven), -2.0);
        assert_eq!(round(1.245, 2, RoundingMode::HalfEven), 1.24);
    }

    #[test]
    fn test_half_odd() {
        assert_eq!(round(2.5, 0, RoundingMode::HalfOdd), 3.0);
        assert_eq!(round(3.5, 0, RoundingMode::HalfOdd), 3.0);
        assert_eq!(round(-2.5, 0, RoundingMode::HalfOdd), -3.0);
        assert_eq!(round(1.245, 2, RoundingMode::HalfOdd), 1.25);
        assert_eq!(round(1.26, 1, RoundingMode::HalfOdd), 1.3);
    }

    #[test]
    fn test_negative_precision() {
        assert_eq!(round_scalar(Scalar::Integer(1250), -2, RoundingMode::HalfUp), 1300.0);
        assert_eq!(round_scalar(Scalar::Integer(1250), -2, RoundingMode::HalfEven), 1200.0);
        assert_eq!(round_scalar(Scalar::Integer(1234), -1, RoundingMode::HalfUp), 1230.0);
        assert_eq!(round_scalar(Scalar::Integer(5), -30, RoundingMode::HalfUp), 0.0);
    }

    #[test]
    fn test_integer_input() {
        assert_eq!(round_scalar(Scalar::Integer(7), 2, RoundingMode::HalfUp), 7.0);
    }

    #[test]
    fn test_binary_fallback() {
        assert_eq!(round(1e300, 2, RoundingMode::HalfUp), 1e300);
        assert!(round(f64::NAN, 2, RoundingMode::HalfUp).is_nan());
        assert_eq!(round(f64::INFINITY, 0, RoundingMode::HalfEven), f64::INFINITY);
        assert_eq!(round_binary(2.5, 0, RoundingMode::HalfOdd), 3.0);
        assert_eq!(round_binary(-3.5, 0, RoundingMode::HalfDown), -3.0);
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
    }
}
