// ============================================================================
// Currency Formatting
// Amount + ISO 4217 code + locale -> display string
// ============================================================================

use super::currency_data::minor_units;
use super::decimal::{format_decimal, parse_locale, FractionDigits};
use crate::numeric::Scalar;
use fixed_decimal::{Decimal, FloatPrecision, Sign, SignedRoundingMode, UnsignedRoundingMode};
use icu::experimental::dimension::currency::formatter::{
    CurrencyFormatter as IcuCurrencyFormatter, CurrencyFormatterPreferences,
};
use icu::experimental::dimension::currency::CurrencyType;
use icu::locale::Locale;

/// Format `amount` as currency `code` under `locale`.
///
/// The amount is rounded half-even to the currency's minor units; symbol,
/// symbol placement and spacing come from the CLDR currency data compiled
/// into ICU4X. The code is case-insensitive.
///
/// # Example
/// ```text
/// (10, "EUR", "de")      -> "10,00 €"
/// (1234.5, "USD", "en")  -> "$1,234.50"
/// (1234.5, "USD", "nl")  -> "US$ 1.234,50"
/// ```
pub(crate) fn format_currency(amount: Scalar, code: &str, locale: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    let locale = parse_locale(locale);
    let digits = minor_units(&code);

    let currency = match CurrencyType::try_from_str(&code) {
        Ok(currency) => currency,
        Err(err) => {
            tracing::warn!(currency = %code, error = ?err, "invalid currency code");
            return unformatted(amount, &code, &locale, digits);
        },
    };

    let prefs = CurrencyFormatterPreferences::from(&locale);
    let formatter = match IcuCurrencyFormatter::try_new_symbol(prefs, currency, Default::default()) {
        Ok(formatter) => formatter,
        Err(err) => {
            tracing::warn!(currency = %code, locale = %locale, error = ?err, "no currency formatter for locale");
            return unformatted(amount, &code, &locale, digits);
        },
    };

    if let Some((sign, text)) = non_finite(amount) {
        // Render a zero with the right sign and swap the digits out.
        let mut zero = Decimal::from(0);
        zero.sign = sign;
        let zero_digits = format_decimal(Scalar::ZERO, &locale, FractionDigits::exact(digits));
        return formatter
            .format_fixed_decimal(&zero)
            .to_string()
            .replacen(&zero_digits, text, 1);
    }

    match to_minor_units(amount, digits) {
        Some(decimal) => formatter.format_fixed_decimal(&decimal).to_string(),
        None => unformatted(amount, &code, &locale, digits),
    }
}

/// The amount rounded half-even to `digits` fraction digits.
fn to_minor_units(amount: Scalar, digits: u8) -> Option<Decimal> {
    let mut decimal = match amount {
        Scalar::Integer(i) => Decimal::from(i),
        Scalar::Float(f) => Decimal::try_from_f64(f, FloatPrecision::RoundTrip).ok()?,
    };
    decimal.round_with_mode(
        -i16::from(digits),
        SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfEven),
    );
    Some(decimal)
}

fn non_finite(amount: Scalar) -> Option<(Sign, &'static str)> {
    match amount {
        Scalar::Float(f) if f.is_nan() => Some((Sign::None, "NaN")),
        Scalar::Float(f) if f == f64::NEG_INFINITY => Some((Sign::Negative, "∞")),
        Scalar::Float(f) if f == f64::INFINITY => Some((Sign::None, "∞")),
        _ => None,
    }
}

/// Locale-formatted number followed by the raw code.
fn unformatted(amount: Scalar, code: &str, locale: &Locale, digits: u8) -> String {
    let number = format_decimal(amount, locale, FractionDigits::exact(digits));
    if code.is_empty() {
        return number;
    }
    format!("{}\u{a0}{}", number, code)
}
