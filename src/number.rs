//! Canonical number formatting
//!
//! Every number that ends up in markup goes through here so that the same
//! value always produces the same text, whether it is a length, a viewBox
//! component, a point or a path operand.

use std::fmt::Write;

/// Format `value` as the shortest decimal string that parses back to it.
///
/// Integral values carry no decimal point and no exponent is ever used:
///
/// ```rust
/// use svgwrite::number::format_number;
///
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(0.1), "0.1");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// ```
pub fn format_number(value: f64) -> String {
    let mut out = String::new();
    write_number(&mut out, value);
    out
}

/// Append the canonical form of `value` to `out`.
pub fn write_number(out: &mut String, value: f64) {
    // f64's Display is shortest round-trip and never switches to exponent form.
    let _ = write!(out, "{}", value);
}

/// Append the decimal form of an integer to `out`.
pub fn write_integer(out: &mut String, value: i64) {
    let _ = write!(out, "{}", value);
}

/// Append `x,y` to `out`.
pub(crate) fn write_pair(out: &mut String, x: f64, y: f64) {
    write_number(out, x);
    out.push(',');
    write_number(out, y);
}
