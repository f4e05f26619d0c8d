// ============================================================================
// Numeric Module
// Fluent numeric value object and its building blocks
// ============================================================================
//
// This module provides:
// - Scalar: integer-or-float number with overflow promotion
// - NumericValue: chainable, mutable wrapper with formatting views
// - NumericInput: loosely typed input for coercion
// - RoundingMode: tie-breaking modes for `NumericValue::round`
// - NumericError: error types for arithmetic and parsing
//
// Design principles:
// - Arithmetic mutates in place and returns `&mut Self` for chaining
// - Division by zero is rejected before the value is touched
// - Rounding and fixed formatting work on the shortest decimal form

mod errors;
mod input;
mod rounding;
mod scalar;
mod value;

pub use errors::{NumericError, NumericResult};
pub use input::{coerce_numeric, maybe_numeric_value, NumericInput};
pub use rounding::RoundingMode;
pub use scalar::Scalar;
pub use value::NumericValue;

pub(crate) use rounding::{round_decimal, MAX_SCALE};
