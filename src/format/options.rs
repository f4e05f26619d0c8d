// ============================================================================
// Format Options
// Configuration for fixed-decimal formatting
// ============================================================================

use crate::numeric::MAX_SCALE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of decimals fixed formatting will render.
pub const MAX_DECIMALS: u32 = MAX_SCALE;

/// Separator and precision settings for locale-independent formatting.
///
/// Defaults to two decimals, `.` as decimal point and `,` as thousands
/// separator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Number of fractional digits (0-28)
    pub decimals: u32,

    /// Text placed between the integer and fractional digits
    pub decimal_point: String,

    /// Text placed between groups of three integer digits.
    /// Empty means no grouping.
    pub thousands_separator: String,
}

impl FormatOptions {
    /// Create options with the given number of decimals and default separators
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }

    /// Builder method: Set number of decimals
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Builder method: Set decimal point
    pub fn with_decimal_point(mut self, decimal_point: impl Into<String>) -> Self {
        self.decimal_point = decimal_point.into();
        self
    }

    /// Builder method: Set thousands separator
    pub fn with_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = separator.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.decimals > MAX_DECIMALS {
            return Err(format!("Decimals cannot exceed {}", MAX_DECIMALS));
        }

        if !self.decimal_point.is_empty() && self.decimal_point == self.thousands_separator {
            return Err("Decimal point and thousands separator must differ".to_string());
        }

        Ok(())
    }

    /// Number of decimals actually rendered.
    pub(crate) fn effective_decimals(&self) -> u32 {
        if let Err(reason) = self.validate() {
            tracing::warn!(options = ?self, "{}", reason);
        }
        self.decimals.min(MAX_DECIMALS)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            decimal_point: ".".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

// ============================================================================
// Presets
// ============================================================================

impl FormatOptions {
    /// Two decimals, `.` decimal point, no grouping: `1234.50`
    pub fn plain() -> Self {
        Self::default().with_thousands_separator("")
    }

    /// Two decimals, `,` decimal point, `.` grouping: `1.234,50`
    pub fn european() -> Self {
        Self::default()
            .with_decimal_point(",")
            .with_thousands_separator(".")
    }
}
