//! Best-effort numeric views of raw values.
//!
//! Both parsers read the longest numeric prefix of the input after leading
//! whitespace and ignore the rest, so `"12px"` reads as `12` and `"abc"` reads
//! as zero. Neither ever fails.
//!
//! ```rust
//! use valtree::number::{parse_float, parse_int};
//!
//! assert_eq!(parse_int("  -42 apples"), -42);
//! assert_eq!(parse_float("2.5e3x"), 2500.0);
//! assert_eq!(parse_int("abc"), 0);
//! ```

/// Parses the leading base-10 integer of `s`.
///
/// Out-of-range values saturate at `i64::MIN` / `i64::MAX`. Input without a
/// leading integer yields `0`.
#[must_use]
pub fn parse_int(s: &str) -> i64 {
    let bytes = s.as_bytes();
    let mut pos = skip_space(bytes, 0);

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    while let Some(digit) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        let digit = i64::from(digit - b'0');
        // Accumulate towards the sign so i64::MIN is reachable.
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
        pos += 1;
    }
    value
}

/// Parses the leading floating-point number of `s`.
///
/// Accepts an optional sign, digits with an optional fraction and exponent, as
/// well as `inf`, `infinity` and `nan` in any case. Input without a leading
/// number yields `0.0`.
#[must_use]
pub fn parse_float(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let start = skip_space(bytes, 0);
    let end = float_prefix_end(bytes, start);
    if end == start {
        return 0.0;
    }
    s[start..end].parse::<f64>().unwrap_or(0.0)
}

fn skip_space(bytes: &[u8], mut pos: usize) -> usize {
    while bytes
        .get(pos)
        .is_some_and(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
    {
        pos += 1;
    }
    pos
}

fn digits_end(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Returns the end of the float literal starting at `start`, or `start` if there is none.
fn float_prefix_end(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    if matches!(bytes.get(pos), Some(b'-' | b'+')) {
        pos += 1;
    }

    let rest = &bytes[pos..];
    for word in [&b"infinity"[..], &b"inf"[..], &b"nan"[..]] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word) {
            return pos + word.len();
        }
    }

    let int_end = digits_end(bytes, pos);
    let mut mantissa_digits = int_end - pos;
    pos = int_end;

    if bytes.get(pos) == Some(&b'.') {
        let frac_end = digits_end(bytes, pos + 1);
        mantissa_digits += frac_end - (pos + 1);
        pos = frac_end;
    }

    if mantissa_digits == 0 {
        return start;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'-' | b'+')) {
            exp += 1;
        }
        let exp_end = digits_end(bytes, exp);
        if exp_end > exp {
            pos = exp_end;
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_plain() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("-7"), -7);
        assert_eq!(parse_int("+15"), 15);
        assert_eq!(parse_int("\t 9"), 9);
    }

    #[test]
    fn test_parse_int_prefix_only() {
        assert_eq!(parse_int("12px"), 12);
        assert_eq!(parse_int("3.99"), 3);
        assert_eq!(parse_int("90,90"), 90);
    }

    #[test]
    fn test_parse_int_malformed_is_zero() {
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int("-"), 0);
        assert_eq!(parse_int("x12"), 0);
    }

    #[test]
    fn test_parse_int_saturates() {
        assert_eq!(parse_int("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_int("-99999999999999999999999"), i64::MIN);
        assert_eq!(parse_int("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn test_parse_float_forms() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("-0.5"), -0.5);
        assert_eq!(parse_float(".25"), 0.25);
        assert_eq!(parse_float("3."), 3.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1.5E-1"), 0.15);
    }

    #[test]
    fn test_parse_float_prefix_only() {
        assert_eq!(parse_float("1.5kg"), 1.5);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("2e+"), 2.0);
        assert_eq!(parse_float("7.5,8.5"), 7.5);
    }

    #[test]
    fn test_parse_float_special_values() {
        assert_eq!(parse_float("inf"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("NaN").is_nan());
    }

    #[test]
    fn test_parse_float_malformed_is_zero() {
        assert_eq!(parse_float(""), 0.0);
        assert_eq!(parse_float("abc"), 0.0);
        assert_eq!(parse_float("."), 0.0);
        assert_eq!(parse_float("-e5"), 0.0);
    }
}
