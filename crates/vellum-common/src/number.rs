//! Best-effort numeric attribute parsing.
//!
//! SVG documents are frequently hand-authored and partially invalid, so
//! numeric attributes never fail to parse. A value is read from its longest
//! numeric prefix (`"100px"` is `100`); a value with no numeric prefix is
//! zero.

use crate::warning::warn_once;

/// Parse the longest leading number of `input`, or `0.0` when there is none.
///
/// Leading whitespace is skipped. An exponent is only consumed when it is
/// followed by at least one digit, so `"2em"` reads as `2`.
#[must_use]
pub fn parse_number(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        if !trimmed.trim_end().is_empty() {
            warn_once("Geometry", &format!("non-numeric value '{input}' treated as 0"));
        }
        return 0.0;
    }
    trimmed[..end].parse().unwrap_or(0.0)
}

/// Split a whitespace/comma separated list and parse each entry with
/// [`parse_number`].
#[must_use]
pub fn parse_number_list(input: &str) -> Vec<f64> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(parse_number)
        .collect()
}

/// Parse a `viewBox` value into `[min_x, min_y, width, height]`.
///
/// Returns `None` unless the value has exactly four components.
#[must_use]
pub fn parse_view_box(input: Option<&str>) -> Option<[f64; 4]> {
    let values = parse_number_list(input?);
    match values.as_slice() {
        &[min_x, min_y, width, height] => Some([min_x, min_y, width, height]),
        _ => None,
    }
}

/// Byte length of the numeric prefix of `s` (sign, digits, fraction, exponent).
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
