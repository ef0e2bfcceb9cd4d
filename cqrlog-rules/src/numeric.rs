//! Numeric string tests.

use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::Regex;

/// Decimal floating-point literal: optional sign, digits with an optional
/// decimal point, optional exponent.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid number regex: {err}"),
    }
});

static DIGITS_PATTERN: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^[0-9]*$") {
    Ok(regex) => regex,
    Err(err) => panic!("Invalid digits regex: {err}"),
});

/// Whether `value` reads as a floating-point number (`+5.5`, `-10`, `1e3`).
/// Surrounding whitespace is ignored.
#[must_use]
pub fn is_number(value: &str) -> bool {
    NUMBER_PATTERN.is_match(value.trim())
}

/// Whether `value` consists of ASCII digits only. The empty string passes.
#[must_use]
pub fn is_only_digits(value: &str) -> bool {
    DIGITS_PATTERN.is_match(value)
}

/// Parse an integer after dropping at most one leading `0`.
///
/// `"0"` stays zero and `"007"` becomes 7.
///
/// # Errors
///
/// Returns the underlying parse error for empty, non-numeric or overflowing input.
pub fn parse_lenient_int(value: &str) -> Result<u32, ParseIntError> {
    let digits = match value.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => rest,
        _ => value,
    };
    digits.parse()
}
