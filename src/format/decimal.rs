// ============================================================================
// Locale-Aware Decimal Formatting
// Number rendering backed by ICU4X compiled CLDR data
// ============================================================================

use super::fixed::format_fixed;
use super::options::FormatOptions;
use crate::locale::FALLBACK_LOCALE;
use crate::numeric::Scalar;
use fixed_decimal::{Decimal, FloatPrecision, SignedRoundingMode, UnsignedRoundingMode};
use icu::decimal::options::DecimalFormatterOptions;
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::locale::Locale;
use std::sync::LazyLock;

/// Fraction digit limits for one rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FractionDigits {
    pub min: u8,
    pub max: u8,
}

impl FractionDigits {
    /// Decimal-style defaults: up to three digits, trailing zeros trimmed.
    pub const DECIMAL: Self = Self { min: 0, max: 3 };

    /// Exactly `digits` fraction digits.
    pub const fn exact(digits: u8) -> Self {
        Self {
            min: digits,
            max: digits,
        }
    }
}

/// Parse a locale identifier, accepting `_` as subtag separator.
///
/// An identifier that does not parse is logged and replaced by the
/// fallback locale.
pub(crate) fn parse_locale(identifier: &str) -> Locale {
    let normalized = identifier.trim().replace('_', "-");
    match normalized.parse::<Locale>() {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(
                locale = identifier,
                error = ?err,
                "invalid locale identifier, using {}",
                FALLBACK_LOCALE
            );
            fallback_locale()
        },
    }
}

/// [`FALLBACK_LOCALE`] as a parsed locale, parsed on first use.
fn fallback_locale() -> Locale {
    static FALLBACK: LazyLock<Locale> =
        LazyLock::new(|| FALLBACK_LOCALE.parse().unwrap_or(Locale::UNKNOWN));
    FALLBACK.clone()
}

/// Render `value` with the grouping and decimal conventions of `locale`.
///
/// Rounds half-even to `digits.max` places, trims trailing zeros and pads
/// back to `digits.min`. Non-finite values render as `NaN`, `∞`, `-∞`.
pub(crate) fn format_decimal(value: Scalar, locale: &Locale, digits: FractionDigits) -> String {
    if let Some(symbol) = non_finite_symbol(value) {
        return symbol.to_string();
    }

    let Some(decimal) = to_icu_decimal(value, digits) else {
        return fallback(value, digits);
    };

    let prefs = DecimalFormatterPreferences::from(locale);
    match DecimalFormatter::try_new(prefs, DecimalFormatterOptions::default()) {
        Ok(formatter) => formatter.format(&decimal).to_string(),
        Err(err) => {
            tracing::warn!(locale = %locale, error = ?err, "no decimal formatter for locale");
            fallback(value, digits)
        },
    }
}

fn to_icu_decimal(value: Scalar, digits: FractionDigits) -> Option<Decimal> {
    let mut decimal = match value {
        Scalar::Integer(i) => Decimal::from(i),
        Scalar::Float(f) => Decimal::try_from_f64(f, FloatPrecision::RoundTrip).ok()?,
    };

    decimal.round_with_mode(
        -i16::from(digits.max),
        SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfEven),
    );
    decimal.absolute.trim_end();
    decimal.absolute.pad_end(-i16::from(digits.min));
    Some(decimal)
}

fn non_finite_symbol(value: Scalar) -> Option<&'static str> {
    match value {
        Scalar::Float(f) if f.is_nan() => Some("NaN"),
        Scalar::Float(f) if f == f64::INFINITY => Some("∞"),
        Scalar::Float(f) if f == f64::NEG_INFINITY => Some("-∞"),
        _ => None,
    }
}

fn fallback(value: Scalar, digits: FractionDigits) -> String {
    format_fixed(value, &FormatOptions::plain().with_decimals(u32::from(digits.max)))
}
