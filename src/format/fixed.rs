// ============================================================================
// Fixed-Decimal Formatting
// Locale-independent rendering with explicit separators
// ============================================================================

use super::options::FormatOptions;
use crate::numeric::{round_decimal, RoundingMode, Scalar};

/// Render `value` with a fixed number of decimals and explicit separators.
///
/// Rounds half away from zero on the shortest decimal form of the value.
/// A value that rounds to zero never carries a minus sign. Non-finite
/// values render as `inf`, `-inf` and `nan`.
pub(crate) fn format_fixed(value: Scalar, options: &FormatOptions) -> String {
    if let Scalar::Float(f) = value {
        if f.is_nan() {
            return "nan".to_string();
        }
        if f.is_infinite() {
            return if f > 0.0 { "inf" } else { "-inf" }.to_string();
        }
    }

    let decimals = options.effective_decimals();
    let (negative, digits) = rounded_digits(value, decimals);

    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(digits.len() + 8);
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, &options.thousands_separator));
    if decimals > 0 {
        out.push_str(&options.decimal_point);
        out.push_str(frac_part);
        for _ in frac_part.len()..decimals as usize {
            out.push('0');
        }
    }
    out
}

/// Sign and unsigned digit string (`1234.5`) rounded to `decimals` places.
fn rounded_digits(value: Scalar, decimals: u32) -> (bool, String) {
    let rounded = value
        .to_decimal()
        .and_then(|d| round_decimal(d, decimals as i32, RoundingMode::HalfUp));

    match rounded {
        Some(d) => (d.is_sign_negative(), d.abs().to_string()),
        // Outside the decimal range: the value is integral at this magnitude.
        None => {
            let f = value.as_f64();
            (f < 0.0, format!("{:.*}", decimals as usize, f.abs()))
        },
    }
}

/// Insert `separator` between groups of three digits, counting from the right.
pub(crate) fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    let lead = digits.len() % 3;
    if lead > 0 {
        out.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits.as_bytes()[lead..].chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            out.push_str(separator);
        }
        // Digits are ASCII, so every chunk is valid UTF-8.
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }
    out
}
