/// Lenient field parse: blank, unparseable or non-finite text counts as 0.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Strict parse for values that feed a back-calculation; failure is NaN.
pub fn parse_strict(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Rounds halves towards positive infinity, so `-2.5` becomes `-2`. Only an
/// exact half moves up.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_treats_blank_and_garbage_as_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount(" 1480 "), 1480.0);
        assert_eq!(parse_amount("-12.5"), -12.5);
    }

    #[test]
    fn parse_strict_surfaces_failures_as_nan() {
        assert!(parse_strict("").is_nan());
        assert!(parse_strict("12abc").is_nan());
        assert_eq!(parse_strict("250"), 250.0);
    }

    #[test]
    fn round_half_up_moves_halves_upwards() {
        assert_eq!(round_half_up(271.5), 272.0);
        assert_eq!(round_half_up(271.49), 271.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
    }

    #[test]
    fn round_half_up_leaves_near_halves_and_large_integers_alone() {
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
        let odd = 4_503_599_627_370_497.0; // 2^52 + 1
        assert_eq!(round_half_up(odd), odd);
        assert_eq!(round_half_up(-odd), -odd);
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn round_to_cents_keeps_two_decimals() {
        assert!((round_to_cents(4561.414397) - 4561.41).abs() < 1e-9);
    }
}
