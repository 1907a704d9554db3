pub mod rounding;
pub mod rules;

pub use rules::renewals::{BatchKind, BatchOutcome, StageBucket, StageBuckets};
pub use rules::rera::{RentBaseline, RentIndexSource};

use shared_types::{DomainResult, RenewalCase, ReraAnalysis};

/// ComplianceEngine entry point
pub struct ComplianceEngine {
    index: RentIndexSource,
}

impl ComplianceEngine {
    pub fn new() -> Self {
        Self {
            index: RentIndexSource::default(),
        }
    }

    /// Check a proposed renewal rent against the RERA cap for `renewal`
    pub fn calculate_rera(&self, renewal: &RenewalCase, proposed_rent_aed: i64) -> DomainResult<ReraAnalysis> {
        rules::rera::calculate_rera(&RentBaseline::from(renewal), proposed_rent_aed, &self.index)
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
