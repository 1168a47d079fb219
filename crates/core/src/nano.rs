//! Conversion between human-readable amounts and integer nano units.
//!
//! An amount with `decimals` fractional digits maps to the integer
//! `value * 10^decimals`. Conversions are exact: inputs that would need
//! rounding are rejected instead.

use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, Signed};
use tracing::{debug, trace};

use crate::amount::RawAmount;
use crate::config::{DEFAULT_DECIMALS, FIXED_POINT_MAX_LOG10};
use crate::error::{ConvertError, Result};

/// Exact `10^decimals`.
pub fn pow10(decimals: u32) -> BigInt {
    BigInt::from(10u8).pow(decimals)
}

/// Converts `value` to nano units at the default scale of 9 decimals.
pub fn to_nano(value: impl Into<RawAmount>) -> Result<BigInt> {
    to_nano_with_decimals(value, DEFAULT_DECIMALS)
}

/// Converts `value` to an integer count of `10^-decimals` units.
///
/// - `Integer` inputs are multiplied by `10^decimals`.
/// - `Float` inputs must be finite. Up to `10^6` they are rendered with
///   exactly `decimals` fractional digits; above that only whole numbers
///   are accepted (`InsufficientPrecision` otherwise).
/// - `Text` inputs are parsed exactly. Every leading `-` flips the sign,
///   and more than `decimals` fractional digits is an `InvalidNumber`.
pub fn to_nano_with_decimals(value: impl Into<RawAmount>, decimals: u32) -> Result<BigInt> {
    let nano = match value.into() {
        RawAmount::Integer(v) => v * pow10(decimals),
        RawAmount::Float(v) => parse_decimal(&render_float(v, decimals)?, decimals)?,
        RawAmount::Text(s) => parse_decimal(&s, decimals)?,
    };
    trace!(%nano, decimals, "converted to nano");
    Ok(nano)
}

/// Formats nano units at the default scale of 9 decimals.
pub fn from_nano(value: impl Into<RawAmount>) -> Result<String> {
    from_nano_with_decimals(value, DEFAULT_DECIMALS)
}

/// Formats an integer count of `10^-decimals` units as the shortest exact
/// decimal string: no trailing fractional zeros, no leading zeros.
///
/// `Float` and `Text` inputs must themselves be integers.
pub fn from_nano_with_decimals(value: impl Into<RawAmount>, decimals: u32) -> Result<String> {
    let value = match value.into() {
        RawAmount::Integer(v) => v,
        RawAmount::Float(v) => float_to_integer(v)?,
        RawAmount::Text(s) => parse_integer(&s)?,
    };

    let negative = value.sign() == Sign::Minus;
    let abs = value.abs();
    let scale = pow10(decimals);

    let frac = format!(
        "{:0>width$}",
        (&abs % &scale).to_string(),
        width = decimals as usize
    );
    let frac = frac.trim_end_matches('0');

    let mut out = String::with_capacity(frac.len() + 24);
    if negative {
        out.push('-');
    }
    out.push_str(&(&abs / &scale).to_string());
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    Ok(out)
}

fn render_float(value: f64, decimals: u32) -> Result<String> {
    if !value.is_finite() {
        debug!(value, "rejecting non-finite number");
        return Err(ConvertError::invalid(value.to_string()));
    }

    // log10(0) is -inf, so zero always renders fixed-point.
    if value.abs().log10() <= FIXED_POINT_MAX_LOG10 {
        let rendered = format!("{:.*}", decimals as usize, value);
        debug!(value, %rendered, "rendered number as fixed-point");
        Ok(rendered)
    } else if value.fract() == 0.0 {
        // `Display` for f64 prints the shortest round-tripping digits, never an exponent.
        let rendered = format!("{}", value);
        debug!(value, %rendered, "rendered number as whole");
        Ok(rendered)
    } else {
        debug!(value, "number too large to carry fractional digits");
        Err(ConvertError::InsufficientPrecision(value.to_string()))
    }
}

fn parse_decimal(input: &str, decimals: u32) -> Result<BigInt> {
    let mut src = input;
    let mut negative = false;
    while let Some(rest) = src.strip_prefix('-') {
        negative = !negative;
        src = rest;
    }

    if src.is_empty() || src == "." {
        debug!(input, "rejecting empty amount");
        return Err(ConvertError::invalid(input));
    }

    let (whole, frac) = src.split_once('.').unwrap_or((src, ""));
    if frac.contains('.') || !is_digits(whole) || !is_digits(frac) {
        debug!(input, "rejecting malformed amount");
        return Err(ConvertError::invalid(input));
    }

    // A missing part counts as a single "0" digit, so scale 0 rejects "5" and "5.".
    let whole = if whole.is_empty() { "0" } else { whole };
    let frac = if frac.is_empty() { "0" } else { frac };
    if frac.len() > decimals as usize {
        debug!(input, decimals, "too many fractional digits");
        return Err(ConvertError::invalid(input));
    }

    let whole = parse_digits(whole, input)?;
    let frac = parse_digits(
        &format!("{:0<width$}", frac, width = decimals as usize),
        input,
    )?;

    let nano = whole * pow10(decimals) + frac;
    Ok(if negative { -nano } else { nano })
}

fn float_to_integer(value: f64) -> Result<BigInt> {
    if !value.is_finite() || value.fract() != 0.0 {
        debug!(value, "nano amount must be a finite integer");
        return Err(ConvertError::invalid(value.to_string()));
    }
    BigInt::from_f64(value).ok_or_else(|| ConvertError::invalid(value.to_string()))
}

fn parse_integer(input: &str) -> Result<BigInt> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    if digits.is_empty() || !is_digits(digits) {
        debug!(input, "nano amount must be an integer");
        return Err(ConvertError::invalid(input));
    }
    let value = parse_digits(digits, input)?;
    Ok(if negative { -value } else { value })
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(digits: &str, input: &str) -> Result<BigInt> {
    BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| ConvertError::invalid(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), BigInt::from(1));
        assert_eq!(pow10(9), BigInt::from(1_000_000_000u64));
        assert_eq!(pow10(30), big("1000000000000000000000000000000"));
    }

    #[test]
    fn test_text_to_nano() {
        assert_eq!(to_nano("1").unwrap(), big("1000000000"));
        assert_eq!(to_nano("0.000000001").unwrap(), BigInt::from(1));
        assert_eq!(to_nano(".5").unwrap(), big("500000000"));
        assert_eq!(to_nano("5.").unwrap(), big("5000000000"));
        assert_eq!(to_nano("007.10").unwrap(), big("7100000000"));
        assert_eq!(
            to_nano("100000000000").unwrap(),
            big("100000000000000000000")
        );
    }

    #[test]
    fn test_sign_toggles_per_dash() {
        assert_eq!(to_nano("-1").unwrap(), big("-1000000000"));
        assert_eq!(to_nano("--1").unwrap(), big("1000000000"));
        assert_eq!(to_nano("---0.5").unwrap(), big("-500000000"));
        assert_eq!(to_nano("-0").unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_malformed_text_rejected() {
        for input in ["", "-", "--", ".", "-.", "1.2.3", "1..2", "+1", " 1", "1 ", "1_000", "1,5", "0x10", "1-", "1.-5", "abc", "1e9"] {
            assert!(
                matches!(to_nano(input), Err(ConvertError::InvalidNumber(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_fraction_longer_than_scale_rejected() {
        assert!(matches!(
            to_nano("0.0000000001"),
            Err(ConvertError::InvalidNumber(_))
        ));
        assert!(matches!(
            to_nano_with_decimals("0.1234567", 6),
            Err(ConvertError::InvalidNumber(_))
        ));
        // trailing zeros still count as supplied digits
        assert!(matches!(
            to_nano_with_decimals("1.0000000", 6),
            Err(ConvertError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_zero_decimals() {
        // the defaulted "0" fraction is one digit, which scale 0 cannot hold
        for input in ["5", "5.", "5.0", ".5", "-5"] {
            assert!(
                matches!(to_nano_with_decimals(input, 0), Err(ConvertError::InvalidNumber(_))),
                "expected {:?} to be rejected at scale 0",
                input
            );
        }
        assert!(matches!(
            to_nano_with_decimals(5.0, 0),
            Err(ConvertError::InvalidNumber(_))
        ));
        assert_eq!(to_nano_with_decimals(5, 0).unwrap(), BigInt::from(5));
        assert_eq!(to_nano_with_decimals("5", 1).unwrap(), BigInt::from(50));
        assert_eq!(from_nano_with_decimals("5", 0).unwrap(), "5");
        assert_eq!(from_nano_with_decimals("-5", 0).unwrap(), "-5");
    }

    #[test]
    fn test_integer_to_nano() {
        assert_eq!(to_nano(1u8).unwrap(), big("1000000000"));
        assert_eq!(to_nano(-3i64).unwrap(), big("-3000000000"));
        assert_eq!(to_nano_with_decimals(1, 6).unwrap(), BigInt::from(1_000_000));
        assert_eq!(to_nano(big("100000000000")).unwrap(), big("100000000000000000000"));
    }

    #[test]
    fn test_float_to_nano() {
        assert_eq!(to_nano(0.33).unwrap(), big("330000000"));
        assert_eq!(to_nano(-0.0).unwrap(), BigInt::from(0));
        assert_eq!(to_nano(-1.5).unwrap(), big("-1500000000"));
        assert_eq!(to_nano(10.000000001).unwrap(), big("10000000001"));
        assert_eq!(to_nano(-20000000.0).unwrap(), big("-20000000000000000"));
    }

    #[test]
    fn test_float_edge_cases() {
        assert!(matches!(to_nano(f64::NAN), Err(ConvertError::InvalidNumber(_))));
        assert!(matches!(to_nano(f64::INFINITY), Err(ConvertError::InvalidNumber(_))));
        assert!(matches!(to_nano(f64::NEG_INFINITY), Err(ConvertError::InvalidNumber(_))));
        assert!(matches!(
            to_nano(10000000.000000001),
            Err(ConvertError::InsufficientPrecision(_))
        ));
        assert!(matches!(
            to_nano(-12345678.5),
            Err(ConvertError::InsufficientPrecision(_))
        ));
    }

    #[test]
    fn test_float_fixed_point_rounds_to_scale() {
        // rendered with exactly `decimals` digits, so sub-scale noise is dropped
        assert_eq!(to_nano_with_decimals(0.1 + 0.2, 6).unwrap(), BigInt::from(300_000));
        assert_eq!(to_nano_with_decimals(0.04, 1).unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_from_nano() {
        assert_eq!(from_nano("1000000000").unwrap(), "1");
        assert_eq!(from_nano("1").unwrap(), "0.000000001");
        assert_eq!(from_nano("0").unwrap(), "0");
        assert_eq!(from_nano("-0").unwrap(), "0");
        assert_eq!(from_nano("+1500000000").unwrap(), "1.5");
        assert_eq!(from_nano(-330000000i64).unwrap(), "-0.33");
        assert_eq!(from_nano(big("100000000000000000000")).unwrap(), "100000000000");
        assert_eq!(from_nano_with_decimals("1", 6).unwrap(), "0.000001");
        assert_eq!(from_nano_with_decimals("10000001", 6).unwrap(), "10.000001");
    }

    #[test]
    fn test_from_nano_float_input() {
        assert_eq!(from_nano(1e9).unwrap(), "1");
        assert_eq!(from_nano(-0.0).unwrap(), "0");
        assert!(matches!(from_nano(0.5), Err(ConvertError::InvalidNumber(_))));
        assert!(matches!(from_nano(f64::NAN), Err(ConvertError::InvalidNumber(_))));
    }

    #[test]
    fn test_from_nano_rejects_non_integral_text() {
        for input in ["", "-", "+", "1.5", "1e9", "--1", " 1", "1_000", "abc"] {
            assert!(
                matches!(from_nano(input), Err(ConvertError::InvalidNumber(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }
}
