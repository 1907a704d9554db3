//! Rounding rules for monetary amounts and percentages
//!
//! All rounding is half-to-even ("banker's rounding"). The compliance boundary
//! `proposed <= max_allowed` depends on this, so both the whole-dirham and the
//! one-decimal percentage rounding go through here.

/// Round an amount to the nearest whole dirham, ties to even
pub fn round_aed(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Round a percentage to one decimal place, ties to even.
///
/// Rounds from the exact binary value: scaling by ten first could turn a value
/// just past a midpoint into a tie.
pub fn round_pct(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_aed_ties_to_even() {
        assert_eq!(round_aed(4.5), 4);
        assert_eq!(round_aed(5.5), 6);
        assert_eq!(round_aed(-2.5), -2);
    }

    #[test]
    fn test_round_aed_non_ties() {
        assert_eq!(round_aed(88570.00000000001), 88570);
        assert_eq!(round_aed(86919.99999999999), 86920);
        assert_eq!(round_aed(10.51), 11);
    }

    #[test]
    fn test_round_pct_one_decimal() {
        assert_eq!(round_pct(6.097560975609756), 6.1);
        assert_eq!(round_pct(-2.4390243902439024), -2.4);
        assert_eq!(round_pct(0.25), 0.2);
        assert_eq!(round_pct(0.75), 0.8);
    }

    #[test]
    fn test_round_pct_near_midpoint_uses_exact_value() {
        // Stored as -5.65000000000000036, just past the midpoint
        let value = (77367 - 82000) as f64 / 82000.0 * 100.0;
        assert_eq!(round_pct(value), -5.7);
        assert_eq!(round_pct(-0.04), 0.0);
    }
}
