// ============================================================================
// Format Module
// String renderings of numeric values
// ============================================================================
//
// This module provides:
// - FormatOptions: separator/precision configuration for fixed formatting
// - fixed: locale-independent rendering with explicit separators
// - decimal: locale-aware rendering through ICU4X
// - currency: locale-aware currency rendering on top of `decimal`

mod currency;
mod currency_data;
mod decimal;
mod fixed;
mod options;

pub use options::{FormatOptions, MAX_DECIMALS};

pub(crate) use currency::format_currency;
pub(crate) use decimal::{format_decimal, parse_locale, FractionDigits};
pub(crate) use fixed::format_fixed;
