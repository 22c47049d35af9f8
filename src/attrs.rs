//! Lenient parsing of `data-*` attribute values.
//!
//! Markup values are read the way browsers read `parseInt`/`parseFloat`:
//! leading whitespace is skipped and the longest numeric prefix wins, so
//! `"300ms"` reads as 300. A value that doesn't parse, or parses to zero,
//! takes the caller's default.

/// Integer prefix of `raw`, or `None` if it has no leading digits. A `0x`
/// prefix switches to hex. Values past `i64` stay approximate instead of
/// failing.
pub fn parse_int(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = if radix == 10 {
        digits[..end].parse::<f64>().ok()?
    } else {
        digits[..end]
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * radix as f64 + d as f64)
    };
    Some(if negative { -value } else { value })
}

/// Float prefix of `raw`, or `None` if no numeric prefix exists.
pub fn parse_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    // exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

/// `parseInt(raw) || default`.
pub fn int_or(raw: Option<&str>, default: f64) -> f64 {
    match raw.and_then(parse_int) {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

/// `parseFloat(raw) || default`.
pub fn float_or(raw: Option<&str>, default: f64) -> f64 {
    match raw.and_then(parse_float) {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => default,
    }
}

/// `raw || default` for string attributes.
pub fn text_or<'a>(raw: Option<&'a str>, default: &'a str) -> &'a str {
    match raw {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix() {
        assert_eq!(parse_int("300"), Some(300.0));
        assert_eq!(parse_int("  300ms"), Some(300.0));
        assert_eq!(parse_int("-40"), Some(-40.0));
        assert_eq!(parse_int("12.9"), Some(12.0));
        assert_eq!(parse_int("ms300"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn int_prefix_reads_hex_and_huge_values() {
        assert_eq!(parse_int("0x10"), Some(16.0));
        assert_eq!(parse_int("-0XfFz"), Some(-255.0));
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("0xg"), None);
        assert_eq!(parse_int("100000000000000000000"), Some(1e20));
        assert_eq!(int_or(Some("0x10"), 0.0), 16.0);
        assert_eq!(int_or(Some("100000000000000000000ms"), 0.0), 1e20);
    }

    #[test]
    fn float_prefix() {
        assert_eq!(parse_float("0.02"), Some(0.02));
        assert_eq!(parse_float(".5x"), Some(0.5));
        assert_eq!(parse_float("3."), Some(3.0));
        assert_eq!(parse_float("1e2px"), Some(100.0));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float("-0.1"), Some(-0.1));
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("abc"), None);
    }

    #[test]
    fn zero_and_garbage_take_the_default() {
        assert_eq!(int_or(Some("0"), 75.0), 75.0);
        assert_eq!(int_or(Some("fast"), 75.0), 75.0);
        assert_eq!(int_or(None, 75.0), 75.0);
        assert_eq!(int_or(Some("40"), 75.0), 40.0);
        assert_eq!(float_or(Some("0"), 0.01), 0.01);
        assert_eq!(float_or(Some("0.03"), 0.01), 0.03);
        assert_eq!(text_or(Some(""), "fadeIn"), "fadeIn");
        assert_eq!(text_or(Some("slideUp"), "fadeIn"), "slideUp");
    }
}
