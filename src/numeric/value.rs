// ============================================================================
// Numeric Value
// Fluent, mutable wrapper around a single number
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::input::NumericInput;
use super::rounding::{round_scalar, RoundingMode};
use super::scalar::Scalar;
use crate::currency::CurrencyFormatter;
use crate::format::{format_decimal, format_fixed, parse_locale, FormatOptions, FractionDigits};
use crate::locale::{default_locale, LocaleSource};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number with chainable arithmetic and several string views.
///
/// Arithmetic mutates in place and returns `&mut Self`, so calls chain:
///
/// ```
/// use number_helper::prelude::*;
///
/// let mut total = NumericValue::create(10);
/// total.add(5).multiply(2).divide(4)?.subtract(0.5);
/// assert_eq!(total.format(2, ".", ","), "7.00");
/// # Ok::<(), NumericError>(())
/// ```
///
/// Every value carries a locale source. Unless one is supplied, it is the
/// process-wide default (see [`crate::locale::set_locale`]) as it stands when
/// the value is built; a later `set_locale` only affects values built after
/// it. A deferred source is still invoked at format time. Supplying a locale
/// to one value never changes the default for others.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct NumericValue {
    value: Scalar,
    #[cfg_attr(feature = "serde", serde(skip, default = "default_locale"))]
    locale: LocaleSource,
}

impl NumericValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a raw number under the current default locale.
    pub fn new(value: impl Into<Scalar>) -> Self {
        Self {
            value: value.into(),
            locale: default_locale(),
        }
    }

    /// Wrap a raw number, or return an existing value unchanged.
    pub fn create(value: impl Into<NumericValue>) -> Self {
        value.into()
    }

    /// Like [`create`](Self::create), with a locale for this value only.
    pub fn create_in(value: impl Into<NumericValue>, locale: impl Into<LocaleSource>) -> Self {
        Self::create(value).with_locale(locale)
    }

    /// Builder method: Set the locale used by this value's locale-aware output
    pub fn with_locale(mut self, locale: impl Into<LocaleSource>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Force `input` into a value, substituting `fallback` when it is not
    /// numeric. Numeric strings are parsed; an existing value passes
    /// through unchanged. Never fails.
    pub fn coerce<'a>(input: impl Into<NumericInput<'a>>, fallback: impl Into<Scalar>) -> Self {
        match input.into() {
            NumericInput::Value(value) => value,
            other => Self::new(other.into_scalar().unwrap_or_else(|| fallback.into())),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn value(&self) -> Scalar {
        self.value
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.value.as_f64()
    }

    /// The locale source this value formats with.
    pub fn locale(&self) -> &LocaleSource {
        &self.locale
    }

    /// The locale identifier locale-aware output will use right now.
    pub fn resolved_locale(&self) -> String {
        self.locale.resolve()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn add(&mut self, number: impl Into<Scalar>) -> &mut Self {
        let rhs: Scalar = number.into();
        self.value = self.value + rhs;
        self
    }

    pub fn subtract(&mut self, number: impl Into<Scalar>) -> &mut Self {
        let rhs: Scalar = number.into();
        self.value = self.value - rhs;
        self
    }

    pub fn multiply(&mut self, number: impl Into<Scalar>) -> &mut Self {
        let rhs: Scalar = number.into();
        self.value = self.value * rhs;
        self
    }

    /// Divide by `number`. The quotient is always a float.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `number` is zero; the value is unchanged.
    pub fn divide(&mut self, number: impl Into<Scalar>) -> NumericResult<&mut Self> {
        self.value = self.value.checked_div(number.into())?;
        Ok(self)
    }

    /// Round to `precision` fractional digits. The result is a float.
    pub fn round(&mut self, precision: i32, mode: RoundingMode) -> &mut Self {
        self.value = Scalar::Float(round_scalar(self.value, precision, mode));
        self
    }

    /// Round to a whole number, half away from zero.
    pub fn round_default(&mut self) -> &mut Self {
        self.round(0, RoundingMode::HalfUp)
    }

    /// Keep the lesser of the current value and `number`.
    pub fn min(&mut self, number: impl Into<Scalar>) -> &mut Self {
        self.value = self.value.min(number.into());
        self
    }

    /// Keep the greater of the current value and `number`.
    pub fn max(&mut self, number: impl Into<Scalar>) -> &mut Self {
        self.value = self.value.max(number.into());
        self
    }

    pub fn absolute(&mut self) -> &mut Self {
        self.value = self.value.abs();
        self
    }

    // ========================================================================
    // Classification
    // ========================================================================

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// True for both `0` and `0.0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Fixed-decimal string with explicit separators, independent of locale.
    ///
    /// `format(2, ".", ",")` on `1234.5` gives `"1,234.50"`.
    pub fn format(&self, decimals: u32, decimal_point: &str, thousands_separator: &str) -> String {
        self.format_with(
            &FormatOptions::new(decimals)
                .with_decimal_point(decimal_point)
                .with_thousands_separator(thousands_separator),
        )
    }

    pub fn format_with(&self, options: &FormatOptions) -> String {
        format_fixed(self.value, options)
    }

    /// Locale-aware number string (grouping and decimal separator of the
    /// active locale, at most three fraction digits).
    pub fn format_locale(&self) -> String {
        let locale = parse_locale(&self.resolved_locale());
        format_decimal(self.value, &locale, FractionDigits::DECIMAL)
    }

    /// Two decimals with trailing zeros and a bare decimal point removed:
    /// `3.00` -> `3`, `3.50` -> `3.5`, `3.105` -> `3.11`.
    pub fn human_readable(&self) -> String {
        let fixed = format_fixed(self.value, &FormatOptions::plain());
        if !fixed.contains('.') {
            return fixed;
        }
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }

    /// The raw value as a string, without any formatting.
    pub fn to_display_string(&self) -> String {
        self.value.to_string()
    }

    /// Currency view of the current value under the active locale.
    pub fn currency(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(Some(self.value), self.resolved_locale())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for NumericValue {
    fn default() -> Self {
        Self::new(Scalar::ZERO)
    }
}

impl PartialEq for NumericValue {
    /// Compares values only; locales are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericValue")
            .field("value", &self.value)
            .field("locale", &self.locale)
            .finish()
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for NumericValue {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Scalar>().map(Self::new)
    }
}

impl From<Scalar> for NumericValue {
    fn from(value: Scalar) -> Self {
        Self::new(value)
    }
}

impl From<NumericValue> for Scalar {
    fn from(value: NumericValue) -> Self {
        value.value
    }
}

impl From<&NumericValue> for Scalar {
    fn from(value: &NumericValue) -> Self {
        value.value
    }
}

impl From<&mut NumericValue> for Scalar {
    fn from(value: &mut NumericValue) -> Self {
        value.value
    }
}

macro_rules! numeric_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericValue {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

numeric_value_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// ============================================================================
// Tests
// ============================================================================
