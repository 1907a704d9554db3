// Rent increase cap per the Dubai RERA rental index
use crate::rounding::{round_aed, round_pct};
use shared_types::{DomainError, DomainResult, RenewalCase, ReraAnalysis};

/// Recommended rent never exceeds the market average by more than 6%
pub const MARKET_PREMIUM_FACTOR: f64 = 1.06;

/// Where the rental index figures come from, shown next to every analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentIndexSource {
    pub source: String,
    pub updated_at: String,
}

impl Default for RentIndexSource {
    fn default() -> Self {
        Self {
            source: "Dubai Land Department - Rental Index 2026".to_string(),
            updated_at: "Feb 7, 2026, 2:34 PM".to_string(),
        }
    }
}

/// Baseline figures a compliance check runs against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentBaseline {
    pub current_rent_aed: i64,
    pub market_average_aed: i64,
    pub max_allowed_increase_pct: f64,
}

impl From<&RenewalCase> for RentBaseline {
    fn from(case: &RenewalCase) -> Self {
        Self {
            current_rent_aed: case.current_rent_aed,
            market_average_aed: case.market_average_aed,
            max_allowed_increase_pct: case.max_allowed_increase_pct,
        }
    }
}

/// Highest rent the cap permits for a renewal
pub fn max_allowed_rent(baseline: &RentBaseline) -> i64 {
    round_aed(baseline.current_rent_aed as f64 * (1.0 + baseline.max_allowed_increase_pct / 100.0))
}

/// Check a proposed rent against the cap and the market average.
///
/// Fails with `InvalidInput` for a non-positive proposal and with
/// `DivisionUndefined` when the market average is zero.
pub fn calculate_rera(
    baseline: &RentBaseline,
    proposed_rent_aed: i64,
    index: &RentIndexSource,
) -> DomainResult<ReraAnalysis> {
    if proposed_rent_aed <= 0 {
        return Err(DomainError::InvalidInput(format!(
            "Proposed rent must be a positive amount (found: {} AED)",
            proposed_rent_aed
        )));
    }

    let market = baseline.market_average_aed;
    if market == 0 {
        return Err(DomainError::DivisionUndefined(
            "Market average rent is zero; rental index reference data is corrupt".to_string(),
        ));
    }

    let vs_market = (proposed_rent_aed - market) as f64 / market as f64 * 100.0;
    let max_allowed = max_allowed_rent(baseline);
    let recommended = max_allowed.min(round_aed(market as f64 * MARKET_PREMIUM_FACTOR));

    Ok(ReraAnalysis {
        current_rent_aed: baseline.current_rent_aed,
        market_average_aed: market,
        proposed_rent_aed,
        your_vs_market_pct: round_pct(vs_market),
        max_allowed_increase_pct: baseline.max_allowed_increase_pct,
        max_allowed_rent_aed: max_allowed,
        recommended_rent_aed: recommended,
        compliant: proposed_rent_aed <= max_allowed,
        updated_at: index.updated_at.clone(),
        source: index.source.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_402() -> RentBaseline {
        RentBaseline {
            current_rent_aed: 85000,
            market_average_aed: 82000,
            max_allowed_increase_pct: 4.2,
        }
    }

    #[test]
    fn test_unit_402_reference_figures() {
        let analysis = calculate_rera(&unit_402(), 87000, &RentIndexSource::default()).unwrap();
        assert_eq!(analysis.max_allowed_rent_aed, 88570);
        assert_eq!(analysis.recommended_rent_aed, 86920);
        assert_eq!(analysis.your_vs_market_pct, 6.1);
        assert!(analysis.compliant);
        assert_eq!(analysis.source, "Dubai Land Department - Rental Index 2026");
    }

    #[test]
    fn test_exactly_max_allowed_is_compliant() {
        let analysis = calculate_rera(&unit_402(), 88570, &RentIndexSource::default()).unwrap();
        assert!(analysis.compliant);

        let analysis = calculate_rera(&unit_402(), 88571, &RentIndexSource::default()).unwrap();
        assert!(!analysis.compliant);
    }

    #[test]
    fn test_below_market_gives_negative_deviation() {
        let analysis = calculate_rera(&unit_402(), 80000, &RentIndexSource::default()).unwrap();
        assert_eq!(analysis.your_vs_market_pct, -2.4);
        assert!(analysis.compliant);
    }

    #[test]
    fn test_deviation_just_past_midpoint_rounds_away() {
        let analysis = calculate_rera(&unit_402(), 77367, &RentIndexSource::default()).unwrap();
        assert_eq!(analysis.your_vs_market_pct, -5.7);
    }

    #[test]
    fn test_recommended_capped_by_max_allowed() {
        // Market is far above the capped rent, so the cap wins
        let baseline = RentBaseline {
            current_rent_aed: 50000,
            market_average_aed: 90000,
            max_allowed_increase_pct: 5.0,
        };
        let analysis = calculate_rera(&baseline, 52000, &RentIndexSource::default()).unwrap();
        assert_eq!(analysis.max_allowed_rent_aed, 52500);
        assert_eq!(analysis.recommended_rent_aed, 52500);
    }

    #[test]
    fn test_tie_rounds_to_even_at_compliance_boundary() {
        // 3 * 1.5 = 4.5 exactly; half-to-even gives 4, so 5 is over the cap
        let baseline = RentBaseline {
            current_rent_aed: 3,
            market_average_aed: 4,
            max_allowed_increase_pct: 50.0,
        };
        assert_eq!(max_allowed_rent(&baseline), 4);
        let analysis = calculate_rera(&baseline, 5, &RentIndexSource::default()).unwrap();
        assert!(!analysis.compliant);
        let analysis = calculate_rera(&baseline, 4, &RentIndexSource::default()).unwrap();
        assert!(analysis.compliant);
    }

    #[test]
    fn test_zero_market_average_is_division_undefined() {
        let baseline = RentBaseline {
            market_average_aed: 0,
            ..unit_402()
        };
        let err = calculate_rera(&baseline, 87000, &RentIndexSource::default()).unwrap_err();
        assert!(matches!(err, DomainError::DivisionUndefined(_)));
    }

    #[test]
    fn test_non_positive_proposal_rejected() {
        for proposed in [0, -1, -87000] {
            let err = calculate_rera(&unit_402(), proposed, &RentIndexSource::default()).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_invalid_proposal_checked_before_market_average() {
        let baseline = RentBaseline {
            market_average_aed: 0,
            ..unit_402()
        };
        let err = calculate_rera(&baseline, 0, &RentIndexSource::default()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    proptest! {
        /// Property: results are always finite and the compliance flag matches the cap
        #[test]
        fn analysis_is_finite_and_consistent(
            current in 1i64..1_000_000,
            market in 1i64..1_000_000,
            pct in 0.0f64..20.0,
            proposed in 1i64..2_000_000,
        ) {
            let baseline = RentBaseline {
                current_rent_aed: current,
                market_average_aed: market,
                max_allowed_increase_pct: pct,
            };
            let analysis = calculate_rera(&baseline, proposed, &RentIndexSource::default()).unwrap();
            prop_assert!(analysis.your_vs_market_pct.is_finite());
            prop_assert_eq!(analysis.compliant, proposed <= analysis.max_allowed_rent_aed);
            prop_assert!(analysis.recommended_rent_aed <= analysis.max_allowed_rent_aed);
            prop_assert!(analysis.max_allowed_rent_aed >= current);
        }
    }
}
