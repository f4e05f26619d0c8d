// ============================================================================
// Currency Formatter
// Renders a fixed amount as money under a fixed locale
// ============================================================================

use crate::format::format_currency;
use crate::locale::default_locale;
use crate::numeric::Scalar;

/// An amount and a locale, ready to be shown in any currency.
///
/// Usually obtained from [`NumericValue::currency`](crate::NumericValue::currency)
/// and discarded after formatting.
///
/// # Example
/// ```
/// use number_helper::CurrencyFormatter;
///
/// let price = CurrencyFormatter::new(Some(1234.5.into()), "en");
/// assert_eq!(price.dollar(), "$1,234.50");
/// assert_eq!(price.in_currency("GBP"), "£1,234.50");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    amount: Scalar,
    locale: String,
}

impl CurrencyFormatter {
    /// Create a formatter; an absent amount is treated as zero.
    pub fn new(amount: Option<Scalar>, locale: impl Into<String>) -> Self {
        Self {
            amount: amount.unwrap_or_default(),
            locale: locale.into(),
        }
    }

    /// Create a formatter bound to the process-wide default locale as it
    /// resolves right now.
    pub fn with_default_locale(amount: Option<Scalar>) -> Self {
        Self::new(amount, default_locale().resolve())
    }

    pub fn amount(&self) -> Scalar {
        self.amount
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Format the amount in the currency with ISO 4217 code `code`
    /// (e.g. `"USD"`, `"EUR"`, case-insensitive).
    pub fn in_currency(&self, code: &str) -> String {
        format_currency(self.amount, code, &self.locale)
    }

    pub fn euro(&self) -> String {
        self.in_currency("EUR")
    }

    pub fn dollar(&self) -> String {
        self.in_currency("USD")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{lock_default_locale, reset_locale, set_locale};

    #[test]
    fn test_absent_amount_is_zero() {
        let formatter = CurrencyFormatter::new(None, "de");
        assert_eq!(formatter.amount(), Scalar::Integer(0));
        assert_eq!(formatter.euro(), "0,00\u{a0}€");
    }

    #[test]
    fn test_euro_and_dollar() {
        let formatter = CurrencyFormatter::new(Some(Scalar::Integer(10)), "de");
        assert_eq!(formatter.euro(), "10,00\u{a0}€");
        assert_eq!(formatter.dollar(), "10,00\u{a0}$");

        let formatter = CurrencyFormatter::new(Some(Scalar::Float(1234.5)), "en-US");
        assert_eq!(formatter.euro(), "€1,234.50");
        assert_eq!(formatter.dollar(), "$1,234.50");
    }

    #[test]
    fn test_in_currency() {
        let formatter = CurrencyFormatter::new(Some(Scalar::Float(99.999)), "en");
        assert_eq!(formatter.in_currency("JPY"), "¥100");
        assert_eq!(formatter.in_currency("gbp"), "£100.00");
    }

    #[test]
    fn test_with_default_locale() {
        let _guard = lock_default_locale();
        let formatter = CurrencyFormatter::with_default_locale(Some(Scalar::Integer(5)));
        assert_eq!(formatter.locale(), "de");

        set_locale("en");
        assert_eq!(formatter.locale(), "de");
        let english = CurrencyFormatter::with_default_locale(None);
        assert_eq!(english.dollar(), "$0.00");
        reset_locale();
    }
}
