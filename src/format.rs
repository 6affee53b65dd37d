/// Results closer to zero than this print as exactly `0`.
pub const ZERO_THRESHOLD: f64 = 1e-6;

/// Significant digits used by the general (`%g` style) form.
pub const GENERAL_PRECISION: i32 = 6;

/// Renders a computed result the way the calculator prints it: near-zero
/// values collapse to `0`, whole values drop their decimals, everything else
/// uses the trimmed general form.
pub fn format_result(result: f64) -> String {
    let result = if result.abs() < ZERO_THRESHOLD {
        0.0
    } else {
        result
    };

    if result == result.trunc() {
        format!("{:.0}", result)
    } else {
        format_general(result)
    }
}

/// Equivalent of C's `%g`: six significant digits, scientific notation for
/// exponents below -4 or from the precision upwards, trailing zeros removed.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent has to come from the rounded value: 999999.5 is 1e+06.
    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero_collapses_to_zero() {
        assert_eq!(format_result(0.0000001), "0");
        assert_eq!(format_result(-0.0000009), "0");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1.2246467991473532e-16), "0");
    }

    #[test]
    fn whole_values_have_no_decimals() {
        assert_eq!(format_result(4.0), "4");
        assert_eq!(format_result(-12.0), "-12");
        assert_eq!(format_result(1024.0), "1024");
        assert_eq!(format_result(1e20), "100000000000000000000");
    }

    #[test]
    fn fractional_values_use_general_form() {
        assert_eq!(format_result(10.0 / 3.0), "3.33333");
        assert_eq!(format_result(2.0 / 3.0), "0.666667");
        assert_eq!(format_result(-2.5), "-2.5");
        assert_eq!(format_result(2f64.sqrt()), "1.41421");
        assert_eq!(format_result(123456.7), "123457");
    }

    #[test]
    fn general_form_switches_to_scientific() {
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(0.0001234), "0.0001234");
        assert_eq!(format_general(1234567.5), "1.23457e+06");
        assert_eq!(format_general(999999.5), "1e+06");
        assert_eq!(format_general(-2.5e-7), "-2.5e-07");
        assert_eq!(format_general(1.5e300), "1.5e+300");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_result(f64::INFINITY), "inf");
        assert_eq!(format_result(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_result(f64::NAN), "nan");
        assert_eq!(format_general(90.0), "90");
    }
}
