// ============================================================================
// Number Helper Library
// Fluent numeric values with locale-aware number and currency formatting
// ============================================================================

//! # Number Helper
//!
//! A small convenience layer for application code that needs to manipulate
//! and render numbers.
//!
//! ## Features
//!
//! - **Chainable arithmetic** on a mutable value (add, subtract, multiply,
//!   divide, round, min/max, absolute)
//! - **Fixed formatting** with explicit decimal point and thousands separator
//! - **Locale-aware formatting** backed by ICU4X CLDR data
//! - **Currency formatting** with per-currency precision and symbols
//! - **Lazy locales**: a locale can be a supplier resolved at format time
//! - **Captured defaults**: a value keeps the default locale it was built under
//!
//! ## Example
//!
//! ```rust
//! use number_helper::prelude::*;
//!
//! let mut price = NumericValue::create_in(1234.5, "de");
//! price.multiply(2).round(1, RoundingMode::HalfUp);
//!
//! assert_eq!(price.format(2, ".", ","), "2,469.00");
//! assert_eq!(price.format_locale(), "2.469");
//! assert_eq!(price.human_readable(), "2469");
//! assert_eq!(price.currency().euro(), "2.469,00\u{a0}€");
//!
//! // Null-safe entry points
//! assert!(maybe_numeric_value(None::<f64>).is_none());
//! assert_eq!(coerce_numeric("abc").to_string(), "0");
//! ```

pub mod currency;
pub mod format;
pub mod locale;
pub mod numeric;

pub use currency::CurrencyFormatter;
pub use numeric::{coerce_numeric, maybe_numeric_value, NumericError, NumericResult, NumericValue};

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::CurrencyFormatter;
    pub use crate::format::FormatOptions;
    pub use crate::locale::{default_locale, reset_locale, set_locale, LocaleSource};
    pub use crate::numeric::{
        coerce_numeric, maybe_numeric_value, NumericError, NumericInput, NumericResult,
        NumericValue, RoundingMode, Scalar,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::locale::lock_default_locale;
    use proptest::prelude::*;

    #[test]
    fn test_end_to_end_formatting() {
        let mut value = NumericValue::create_in(1000, "en");
        value.add(234.5).subtract(NumericValue::create(0.25));

        assert_eq!(value.format(2, ".", ","), "1,234.25");
        assert_eq!(value.format_locale(), "1,234.25");
        assert_eq!(value.human_readable(), "1234.25");
        assert_eq!(value.to_display_string(), "1234.25");
        assert_eq!(value.currency().dollar(), "$1,234.25");
    }

    #[test]
    fn test_german_euro_golden() {
        let _guard = lock_default_locale();
        assert_eq!(NumericValue::create(10).currency().euro(), "10,00\u{a0}€");
        assert_eq!(
            NumericValue::create(1234567.891).currency().euro(),
            "1.234.567,89\u{a0}€"
        );
    }

    #[test]
    fn test_values_keep_the_default_they_were_built_with() {
        let _guard = lock_default_locale();
        let existing = NumericValue::create(1234.5);

        set_locale("en-US");
        let created_later = NumericValue::create(1234.5);
        assert_eq!(existing.format_locale(), "1.234,5");
        assert_eq!(existing.currency().euro(), "1.234,50\u{a0}€");
        assert_eq!(created_later.format_locale(), "1,234.5");
        assert_eq!(created_later.currency().dollar(), "$1,234.50");

        reset_locale();
        assert_eq!(created_later.format_locale(), "1,234.5");
    }

    #[test]
    fn test_deferred_default_locale() {
        let _guard = lock_default_locale();
        set_locale(LocaleSource::deferred(|| "en".to_string()));
        assert_eq!(NumericValue::create(2500).format_locale(), "2,500");
        reset_locale();
    }

    #[test]
    fn test_invalid_locale_falls_back() {
        let value = NumericValue::create_in(1234.5, "??");
        assert_eq!(value.format_locale(), "1.234,5");
        assert_eq!(value.currency().euro(), "1.234,50\u{a0}€");
    }

    #[test]
    fn test_divide_then_multiply_chain() {
        let mut value = NumericValue::create(7);
        let result = value.divide(3).map(|v| v.multiply(3).round(10, RoundingMode::HalfUp).as_f64());
        assert_eq!(result, Ok(7.0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_divide_multiply_round_trip(
            a in -1.0e9f64..1.0e9f64,
            b in prop_oneof![-1.0e6f64..-1.0e-6f64, 1.0e-6f64..1.0e6f64],
        ) {
            let mut value = NumericValue::create(a);
            value.divide(b).unwrap().multiply(b);
            let tolerance = 1e-9 * a.abs().max(1.0);
            prop_assert!(
                (value.as_f64() - a).abs() <= tolerance,
                "{} / {} * {} = {}", a, b, b, value.as_f64()
            );
        }

        #[test]
        fn test_absolute_is_never_negative(a in any::<i64>(), f in -1.0e12f64..1.0e12f64) {
            let mut int_value = NumericValue::create(a);
            int_value.absolute();
            prop_assert!(!int_value.is_negative());
            prop_assert_eq!(int_value.is_positive(), a != 0);

            let mut float_value = NumericValue::create(f);
            float_value.absolute();
            prop_assert!(!float_value.is_negative());
            prop_assert_eq!(float_value.is_positive(), f != 0.0);
        }

        #[test]
        fn test_divide_by_zero_always_rejected(a in any::<i64>(), f in any::<f64>()) {
            let mut int_value = NumericValue::create(a);
            prop_assert_eq!(int_value.divide(0).err(), Some(NumericError::DivisionByZero));
            prop_assert_eq!(int_value.value(), Scalar::Integer(a));

            let mut float_value = NumericValue::create(f);
            prop_assert_eq!(float_value.divide(0.0).err(), Some(NumericError::DivisionByZero));
        }

        #[test]
        fn test_is_zero_only_for_zero(f in any::<f64>()) {
            prop_assert_eq!(NumericValue::create(f).is_zero(), f == 0.0);
        }

        #[test]
        fn test_human_readable_has_no_trailing_zero_fraction(f in -1.0e9f64..1.0e9f64) {
            let text = NumericValue::create(f).human_readable();
            if text.contains('.') {
                prop_assert!(!text.ends_with('0'), "{}", text);
            }
            prop_assert!(!text.ends_with('.'), "{}", text);
        }
    }
}
