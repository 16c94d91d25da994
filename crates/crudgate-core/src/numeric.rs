//! Lenient decimal parsing for numeric route parameters.
//!
//! Route parameters arrive as strings and are accepted when they *start*
//! with a parseable decimal number, matching the behavior of common web
//! routers: `"42"`, `"3.9"`, `"1e3"`, and `"3abc"` are all numeric, while
//! `""`, `"abc"`, and `"Infinity"` are not.

/// Parses the longest leading decimal-float prefix of `s`.
///
/// Leading whitespace is skipped. An optional sign, integer digits, a
/// fraction, and an exponent are consumed; the exponent only counts when at
/// least one digit follows it. `Infinity` is recognized (and returned as an
/// infinite value, which callers reject as non-finite). Returns `None` when
/// no digits are found.
pub fn float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent is only part of the number if it carries digits.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().ok()
}

/// Parses the longest leading base-10 integer prefix of `s`.
///
/// Leading whitespace is skipped; an optional sign and decimal digits are
/// consumed. Returns `None` when no digits are found. Values outside the
/// `i64` range saturate.
pub fn int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = i < bytes.len() && bytes[i] == b'-';
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let digit_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }

    if i == digit_start {
        return None;
    }

    match s[..i].parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) => Some(if negative { i64::MIN } else { i64::MAX }),
    }
}
