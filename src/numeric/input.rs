// ============================================================================
// Numeric Input
// Loosely typed input for coercion and the null-safe entry points
// ============================================================================

use super::scalar::Scalar;
use super::value::NumericValue;

/// Anything a caller may hand to [`NumericValue::coerce`].
#[derive(Debug, Clone)]
pub enum NumericInput<'a> {
    /// A raw number
    Number(Scalar),
    /// Text that may or may not hold a number
    Text(&'a str),
    /// An existing value, passed through unchanged
    Value(NumericValue),
    /// Nothing at all
    Absent,
}

impl NumericInput<'_> {
    /// The number this input holds, if any.
    pub fn into_scalar(self) -> Option<Scalar> {
        match self {
            NumericInput::Number(scalar) => Some(scalar),
            NumericInput::Text(text) => text.parse().ok(),
            NumericInput::Value(value) => Some(value.value()),
            NumericInput::Absent => None,
        }
    }
}

macro_rules! input_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput<'_> {
                #[inline]
                fn from(value: $t) -> Self {
                    NumericInput::Number(Scalar::from(value))
                }
            }
        )*
    };
}

input_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, Scalar);

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(text: &'a str) -> Self {
        NumericInput::Text(text)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(text: &'a String) -> Self {
        NumericInput::Text(text.as_str())
    }
}

impl From<NumericValue> for NumericInput<'_> {
    fn from(value: NumericValue) -> Self {
        NumericInput::Value(value)
    }
}

impl<'a, T: Into<NumericInput<'a>>> From<Option<T>> for NumericInput<'a> {
    fn from(input: Option<T>) -> Self {
        input.map_or(NumericInput::Absent, Into::into)
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Force `input` into a value, substituting zero when it is not numeric.
///
/// # Example
/// ```
/// use number_helper::coerce_numeric;
///
/// assert_eq!(coerce_numeric("42").to_string(), "42");
/// assert_eq!(coerce_numeric("abc").to_string(), "0");
/// ```
pub fn coerce_numeric<'a>(input: impl Into<NumericInput<'a>>) -> NumericValue {
    NumericValue::coerce(input, Scalar::ZERO)
}

/// `None` for an absent amount, otherwise the wrapped amount.
///
/// # Example
/// ```
/// use number_helper::maybe_numeric_value;
///
/// assert!(maybe_numeric_value(None::<f64>).is_none());
/// assert_eq!(maybe_numeric_value(Some(5)).unwrap().to_string(), "5");
/// ```
pub fn maybe_numeric_value<T: Into<NumericValue>>(amount: Option<T>) -> Option<NumericValue> {
    amount.map(NumericValue::create)
}
