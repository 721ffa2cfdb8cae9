//! Display formatting
//!
//! Converts computed `f64` values into display text that fits in
//! [`MAX_DISPLAY_LENGTH`] characters, and parses display text back into numbers.
//!
//! # Strategy
//!
//! ```text
//! value ──► shortest decimal ──► fits? ──────────────────────────► strip zeros
//!                                  │ no
//!                                  ├─ huge / tiny  ──► exponential
//!                                  ├─ has a point  ──► fewer fraction digits
//!                                  └─ integer      ──► truncate
//! ```
//!
//! Very long integers between `1e15` and the exponential threshold are
//! truncated, which loses magnitude. This is accepted: the calculator does not
//! promise exact results for numbers that do not fit on the display.

use super::constants::{
    EXACT_FRACTION_DIGITS, EXPONENTIAL_LOWER_BOUND, EXPONENTIAL_PRECISION,
    EXPONENTIAL_UPPER_BOUND, MAX_DISPLAY_LENGTH,
};
use super::errors::CalcError;

/// Format a number for the display.
///
/// The result is never longer than [`MAX_DISPLAY_LENGTH`] characters, and
/// formatting the parsed result again yields the same text.
/// Non-finite values fall through the normal conversion (`inf`, `-inf`, `NaN`).
pub fn format_display(value: f64) -> String {
    let text = render(value);

    // A rounded mantissa may name a number that renders differently on its
    // own: 1.50000000001e-6 rounds to 1.5e-6, which fits as "0.0000015".
    if text.contains('e') {
        if let Ok(rounded) = text.parse::<f64>() {
            return render(rounded);
        }
    }

    text
}

fn render(value: f64) -> String {
    // `-0` prints as "-0" in Rust; the display only ever shows "0"
    let mut text = if value == 0.0 {
        String::from("0")
    } else {
        value.to_string()
    };

    if text.len() > MAX_DISPLAY_LENGTH {
        let magnitude = value.abs();
        if magnitude > EXPONENTIAL_UPPER_BOUND
            || (magnitude > 0.0 && magnitude < EXPONENTIAL_LOWER_BOUND)
        {
            text = format_exponential(value);
        } else if let Some(point) = text.find('.') {
            let fraction_digits = MAX_DISPLAY_LENGTH.saturating_sub(1 + point);
            text = format_fixed(value, fraction_digits);
            if text.len() > MAX_DISPLAY_LENGTH {
                text.truncate(MAX_DISPLAY_LENGTH);
                // Truncation can leave a dangling point behind
                if text.ends_with('.') {
                    text.pop();
                }
            }
        } else {
            text.truncate(MAX_DISPLAY_LENGTH);
        }
    }

    strip_trailing_zeros(&text)
}

/// Parse display text into a number.
///
/// The error sentinel, malformed text and `NaN` are all rejected.
pub fn parse_display(text: &str) -> Result<f64, CalcError> {
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(CalcError::InvalidNumber {
            text: text.to_string(),
        }),
    }
}

/// Render with `fraction_digits` digits after the point.
///
/// An exact tie rounds away from zero (`0.25` -> `0.3`). Rust's own
/// fixed-precision formatting would round it to even instead.
fn format_fixed(value: f64, fraction_digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let Some(point) = exact.find('.') else {
        return format!("{:.*}", fraction_digits, value);
    };

    let kept_end = if fraction_digits == 0 {
        point
    } else {
        point + 1 + fraction_digits
    };
    let (kept, dropped) = exact.split_at(kept_end);
    let dropped = dropped.trim_start_matches('.');

    let is_tie = dropped
        .strip_prefix('5')
        .is_some_and(|rest| rest.bytes().all(|b| b == b'0'));
    if is_tie {
        increment_last_digit(kept)
    } else {
        format!("{:.*}", fraction_digits, value)
    }
}

/// Add one unit in the last place to a decimal string, away from zero
fn increment_last_digit(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '9' => *c = '0',
            '0'..='8' => {
                *c = char::from(*c as u8 + 1);
                return chars.into_iter().collect();
            }
            _ => {}
        }
    }
    // Carried past the leading digit: 99.5 -> 100
    let leading = usize::from(text.starts_with('-'));
    chars.insert(leading, '1');
    chars.into_iter().collect()
}

/// Render in exponential form, shrinking the mantissa until the token fits.
///
/// Trailing mantissa zeros and the `+` exponent sign are dropped on purpose:
/// `9.9999998e15`, not `9.999999800e+15`.
fn format_exponential(value: f64) -> String {
    let mut precision = EXPONENTIAL_PRECISION;
    loop {
        let text = strip_trailing_zeros(&format!("{:.*e}", precision, value));
        if text.len() <= MAX_DISPLAY_LENGTH || precision == 0 {
            return text;
        }
        precision -= 1;
    }
}

/// Remove trailing zeros after the decimal point: "3.10" -> "3.1", "3.00" -> "3".
///
/// Exponential tokens are trimmed in the mantissa only. Text that ends with a
/// bare point (still being typed) is left alone.
fn strip_trailing_zeros(text: &str) -> String {
    if let Some((mantissa, exponent)) = text.split_once('e') {
        return format!("{}e{}", strip_trailing_zeros(mantissa), exponent);
    }

    if !text.contains('.') || text.ends_with('.') {
        return text.to_string();
    }

    let trimmed = text.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}
