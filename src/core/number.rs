//! Numeric helpers shared by the geometry engine and label formatting.

use std::fmt::Write as _;

/// Rounds to one decimal place, half away from zero.
#[must_use]
pub fn round_point(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Maps NaN and infinities to `0.0`.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// `value * 100 / base` rounded to one decimal, or `0.0` when either side is zero.
#[must_use]
pub fn percent_of(value: f64, base: f64) -> f64 {
    if value == 0.0 || base == 0.0 {
        return 0.0;
    }
    let mut ratio = value * 100.0 / base;
    if !ratio.is_finite() {
        // `value * 100` overflows near f64::MAX; divide first.
        ratio = value / base * 100.0;
    }
    finite_or_zero(round_point(ratio))
}

/// Shortest round-trip decimal, printed the way JavaScript prints numbers
/// (`12.5`, `0`, `100`), so path strings stay byte-compatible with
/// browser-side consumers.
pub(crate) fn push_js_number(out: &mut String, value: f64, buf: &mut ryu_js::Buffer) {
    let mut value = finite_or_zero(value);
    if value == 0.0 {
        // normalize `-0.0`
        value = 0.0;
    }
    out.push_str(buf.format_finite(value));
}

#[must_use]
pub fn js_number(value: f64) -> String {
    let mut out = String::new();
    let mut buf = ryu_js::Buffer::new();
    push_js_number(&mut out, value, &mut buf);
    out
}

/// Formats a magnitude with `,` thousands separators in its integer part.
#[must_use]
pub fn format_number(value: f64) -> String {
    let raw = js_number(value);
    if raw.contains('e') {
        return raw;
    }

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(raw.len() + integer.len() / 3);
    out.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        let _ = write!(out, ".{fraction}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_point_keeps_one_decimal() {
        assert_eq!(round_point(18.75), 18.8);
        assert_eq!(round_point(31.25), 31.3);
        assert_eq!(round_point(12.5), 12.5);
        assert_eq!(round_point(-0.04), 0.0);
    }

    #[test]
    fn percent_of_zero_base_is_zero() {
        assert_eq!(percent_of(10.0, 0.0), 0.0);
        assert_eq!(percent_of(0.0, 10.0), 0.0);
        assert_eq!(percent_of(1.0, 3.0), 33.3);
    }

    #[test]
    fn percent_of_huge_magnitudes_does_not_overflow() {
        assert_eq!(percent_of(1e307, 1e307), 100.0);
        assert_eq!(percent_of(5e306, 1e307), 50.0);
    }

    #[test]
    fn js_number_drops_trailing_zero_fraction() {
        assert_eq!(js_number(100.0), "100");
        assert_eq!(js_number(12.5), "12.5");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(f64::NAN), "0");
    }

    #[test]
    fn format_number_groups_integer_digits() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(12345.25), "12,345.25");
        assert_eq!(format_number(-4500.0), "-4,500");
    }
}
