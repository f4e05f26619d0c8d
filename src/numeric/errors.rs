// ============================================================================
// Numeric Errors
// Error types for numeric value operations
// ============================================================================

use std::fmt;

/// Errors that can occur while manipulating a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// Input string is not a number
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero is not allowed"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::DivisionByZero.to_string(),
            "division by zero is not allowed"
        );
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: could not parse value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::DivisionByZero, NumericError::DivisionByZero);
        assert_ne!(NumericError::DivisionByZero, NumericError::InvalidInput);
    }
}
