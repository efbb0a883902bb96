/// Renders a float as the shortest text that round-trips: `1.0` rather than `1`,
/// positional notation for exponents in `-4..16`, otherwise a signed two-digit exponent
/// such as `1e-05`.
pub fn format_shortest(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e-5".
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if !(-4..16).contains(&exponent) {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exponent_sign}{:02}", exponent.abs());
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{sign}{digits}{zeros}.0")
    } else {
        format!("{sign}{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

/// Significant digits kept by [`format_legacy`].
const LEGACY_SIGNIFICANT_DIGITS: usize = 12;

/// Renders a float the way the tools have always printed it: twelve significant digits
/// (`%.12g`), trailing zeros dropped but a `.0` kept on whole numbers, exponent form
/// below `1e-4` and from `1e12` on.
pub fn format_legacy(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Rounds to the kept digits, carrying into the exponent, e.g. "8.16496580928e-1".
    let scientific = format!("{:.*e}", LEGACY_SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let significant = digits.trim_end_matches('0');

    if exponent < -4 || exponent >= LEGACY_SIGNIFICANT_DIGITS as i32 {
        let mantissa = if significant.len() > 1 {
            format!("{}.{}", &significant[..1], &significant[1..])
        } else {
            digits[..1].to_string()
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exponent_sign}{:02}", exponent.abs());
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{sign}0.{zeros}{significant}");
    }

    let int_len = exponent as usize + 1;
    let fraction = digits[int_len..].trim_end_matches('0');
    if fraction.is_empty() {
        format!("{sign}{}.0", &digits[..int_len])
    } else {
        format!("{sign}{}.{}", &digits[..int_len], fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_keep_a_fractional_zero() {
        assert_eq!(format_shortest(1.0), "1.0");
        assert_eq!(format_shortest(0.0), "0.0");
        assert_eq!(format_shortest(-0.0), "-0.0");
        assert_eq!(format_shortest(1200.0), "1200.0");
    }

    #[test]
    fn fractions_use_shortest_round_trip_digits() {
        assert_eq!(format_shortest(2.5), "2.5");
        assert_eq!(format_shortest(-12.345), "-12.345");
        assert_eq!(format_shortest(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_shortest(0.0001), "0.0001");
    }

    #[test]
    fn small_and_large_magnitudes_use_exponent_notation() {
        assert_eq!(format_shortest(0.00001), "1e-05");
        assert_eq!(format_shortest(-2.5e-7), "-2.5e-07");
        assert_eq!(format_shortest(1e16), "1e+16");
        assert_eq!(format_shortest(1.5e100), "1.5e+100");
    }

    #[test]
    fn largest_positional_value_stays_positional() {
        assert_eq!(format_shortest(1234567890123456.0), "1234567890123456.0");
    }

    #[test]
    fn legacy_rounds_to_twelve_significant_digits() {
        assert_eq!(format_legacy(0.816496580927726), "0.816496580928");
        assert_eq!(format_legacy(1.0023333333333333), "1.00233333333");
        assert_eq!(format_legacy(0.1 + 0.2), "0.3");
        assert_eq!(format_legacy(-12.345), "-12.345");
    }

    #[test]
    fn legacy_whole_numbers_keep_a_fractional_zero() {
        assert_eq!(format_legacy(0.0), "0.0");
        assert_eq!(format_legacy(-0.0), "-0.0");
        assert_eq!(format_legacy(1.0), "1.0");
        assert_eq!(format_legacy(123456789012.0), "123456789012.0");
    }

    #[test]
    fn legacy_exponent_form_outside_positional_range() {
        assert_eq!(format_legacy(0.0001), "0.0001");
        assert_eq!(format_legacy(0.00001), "1e-05");
        assert_eq!(format_legacy(-2.5e-7), "-2.5e-07");
        assert_eq!(format_legacy(1e12), "1e+12");
        assert_eq!(format_legacy(1e16), "1e+16");
        assert_eq!(format_legacy(1234567890123456.0), "1.23456789012e+15");
    }

    #[test]
    fn legacy_rounding_carries_into_the_exponent() {
        assert_eq!(format_legacy(9.9999999999999), "10.0");
        assert_eq!(format_legacy(999999999999.9), "1e+12");
    }

    #[test]
    fn non_finite_values_have_text_names() {
        assert_eq!(format_shortest(f64::NAN), "nan");
        assert_eq!(format_shortest(f64::INFINITY), "inf");
        assert_eq!(format_shortest(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_legacy(f64::NAN), "nan");
        assert_eq!(format_legacy(f64::NEG_INFINITY), "-inf");
    }
}
