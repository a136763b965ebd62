//! Lenient numeric parsing shared by the extractor, converter and validator
//!
//! CFG files are hand edited, so numbers are read the forgiving way the
//! format's consumers expect: a numeric prefix counts (`"12px"` is 12), and
//! full-string coercion treats blank input as zero.

use regex::Regex;
use std::sync::OnceLock;

fn float_prefix_regex() -> &'static Regex {
    static FLOAT_PREFIX: OnceLock<Regex> = OnceLock::new();
    FLOAT_PREFIX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("float prefix pattern is valid")
    })
}

fn decimal_regex() -> &'static Regex {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    DECIMAL.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").expect("decimal pattern is valid")
    })
}

/// Parse the leading integer of `input`
///
/// Leading whitespace and a sign are accepted. With `allow_hex`, a `0x`
/// prefix switches to base 16. Returns `None` when no digit is found or the
/// value does not fit in an `i64`.
pub fn parse_int_prefix(input: &str, allow_hex: bool) -> Option<i64> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") if allow_hex => (16, &s[2..]),
        _ => (10, s),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i128::from_str_radix(&digits[..end], radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Parse the leading floating point number of `input`
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let matched = float_prefix_regex().find(s)?.as_str();
    match matched.trim_start_matches(['+', '-']) {
        "Infinity" if matched.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => matched.parse().ok(),
    }
}

/// Coerce a whole string to a number, `None` when it is not numeric
///
/// Blank strings coerce to zero; hexadecimal `0x` literals and the
/// spelled-out infinities are accepted.
pub fn coerce_number(input: &str) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).ok().map(|v| v as f64);
    }

    if decimal_regex().is_match(s) {
        s.parse().ok()
    } else {
        None
    }
}

/// Shortest text form of a number, with an exponent outside `[1e-6, 1e21)`
///
/// `1e21` renders as `1e+21`, `0.0000001` as `1e-7`, infinities as
/// `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    format!("{value}")
}
