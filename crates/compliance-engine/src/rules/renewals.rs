// Renewal pipeline: stage bucketing, bulk processing, 90-day notices
use serde::Serialize;
use shared_types::{RenewalCase, AI_STATUS_OFFER_READY, AI_STATUS_RERA_PENDING, RENEWAL_STAGES};

/// Cases at least this many days from expiry are due a renewal notice
pub const NOTICE_THRESHOLD_DAYS: u32 = 90;

/// Renewal cases sharing one stage label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageBucket {
    pub stage: String,
    pub cases: Vec<RenewalCase>,
}

/// Renewal cases grouped by stage.
///
/// The four canonical stages are always present, in pipeline order, even when
/// empty. Unrecognised stage labels get their own bucket after them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageBuckets {
    buckets: Vec<StageBucket>,
}

impl StageBuckets {
    pub fn get(&self, stage: &str) -> Option<&[RenewalCase]> {
        self.buckets
            .iter()
            .find(|b| b.stage == stage)
            .map(|b| b.cases.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageBucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of cases across all buckets
    pub fn total_cases(&self) -> usize {
        self.buckets.iter().map(|b| b.cases.len()).sum()
    }
}

/// Group cases by exact stage label, keeping the order they are given in
pub fn bucket_by_stage<'a>(cases: impl IntoIterator<Item = &'a RenewalCase>) -> StageBuckets {
    let mut buckets: Vec<StageBucket> = RENEWAL_STAGES
        .iter()
        .map(|stage| StageBucket {
            stage: stage.to_string(),
            cases: Vec::new(),
        })
        .collect();

    for case in cases {
        match buckets.iter_mut().find(|b| b.stage == case.stage) {
            Some(bucket) => bucket.cases.push(case.clone()),
            None => buckets.push(StageBucket {
                stage: case.stage.clone(),
                cases: vec![case.clone()],
            }),
        }
    }

    StageBuckets { buckets }
}

/// Which batch action ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchKind {
    BulkProcess,
    Notices,
}

/// Outcome of a renewal batch action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub kind: BatchKind,
    pub count: usize,
}

impl BatchOutcome {
    pub fn message(&self) -> String {
        match self.kind {
            BatchKind::BulkProcess => format!(
                "Processed {} renewal cases. Manager review queue updated.",
                self.count
            ),
            BatchKind::Notices => format!(
                "Sent {} automated 90-day notices. Awaiting manager sign-off logs.",
                self.count
            ),
        }
    }
}

/// Move every case waiting on a RERA check to "Offer ready".
///
/// Other statuses are left alone, so a second run after the pending set is
/// exhausted transitions nothing.
pub fn bulk_process<'a>(cases: impl IntoIterator<Item = &'a mut RenewalCase>) -> BatchOutcome {
    let mut count = 0;
    for case in cases {
        if case.ai_status == AI_STATUS_RERA_PENDING {
            case.ai_status = AI_STATUS_OFFER_READY.to_string();
            count += 1;
        }
    }
    BatchOutcome {
        kind: BatchKind::BulkProcess,
        count,
    }
}

/// Count cases due a 90-day notice. Read-only: no case is modified.
pub fn count_notices_due<'a>(cases: impl IntoIterator<Item = &'a RenewalCase>) -> BatchOutcome {
    let count = cases
        .into_iter()
        .filter(|c| c.days_out >= NOTICE_THRESHOLD_DAYS)
        .count();
    BatchOutcome {
        kind: BatchKind::Notices,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{STAGE_30_60, STAGE_60_90, STAGE_90_PLUS, STAGE_UNDER_30};

    fn case(unit_id: &str, days_out: u32, stage: &str, ai_status: &str) -> RenewalCase {
        RenewalCase {
            unit_id: unit_id.to_string(),
            unit: format!("Unit {}", &unit_id[2..]),
            tenant_name: "Tenant".to_string(),
            current_rent_aed: 90000,
            expiry_date: "01/01/2027".to_string(),
            days_out,
            stage: stage.to_string(),
            ai_status: ai_status.to_string(),
            area: "JBR".to_string(),
            bedrooms: "1BR apartment".to_string(),
            market_average_aed: 92000,
            max_allowed_increase_pct: 4.0,
        }
    }

    fn pipeline() -> Vec<RenewalCase> {
        vec![
            case("U-402", 62, STAGE_60_90, AI_STATUS_RERA_PENDING),
            case("U-809", 45, STAGE_30_60, AI_STATUS_OFFER_READY),
            case("U-111", 14, STAGE_UNDER_30, "Sent to tenant"),
            case("U-210", 166, STAGE_90_PLUS, AI_STATUS_RERA_PENDING),
        ]
    }

    #[test]
    fn test_buckets_in_pipeline_order() {
        let buckets = bucket_by_stage(&pipeline());
        let stages: Vec<_> = buckets.iter().map(|b| b.stage.as_str()).collect();
        assert_eq!(stages, RENEWAL_STAGES.to_vec());
        assert_eq!(buckets.total_cases(), 4);
        assert!(buckets.iter().all(|b| b.cases.len() == 1));
    }

    #[test]
    fn test_empty_input_still_has_four_buckets() {
        let buckets = bucket_by_stage(&Vec::<RenewalCase>::new());
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets.total_cases(), 0);
        assert_eq!(buckets.get(STAGE_UNDER_30), Some(&[][..]));
    }

    #[test]
    fn test_unknown_stage_gets_own_bucket() {
        let mut cases = pipeline();
        cases.push(case("U-999", 200, "Archived", "Offer ready"));
        let buckets = bucket_by_stage(&cases);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets.get("Archived").map(|c| c.len()), Some(1));
        assert_eq!(buckets.total_cases(), 5);
    }

    #[test]
    fn test_bucket_preserves_storage_order() {
        let cases = vec![
            case("U-300", 70, STAGE_60_90, "Offer ready"),
            case("U-100", 80, STAGE_60_90, "Offer ready"),
            case("U-200", 65, STAGE_60_90, "Offer ready"),
        ];
        let buckets = bucket_by_stage(&cases);
        let ids: Vec<_> = buckets
            .get(STAGE_60_90)
            .unwrap()
            .iter()
            .map(|c| c.unit_id.as_str())
            .collect();
        assert_eq!(ids, vec!["U-300", "U-100", "U-200"]);
    }

    #[test]
    fn test_bulk_process_only_touches_pending() {
        let mut cases = pipeline();
        let outcome = bulk_process(&mut cases);
        assert_eq!(outcome.count, 2);
        assert_eq!(cases[0].ai_status, AI_STATUS_OFFER_READY);
        assert_eq!(cases[2].ai_status, "Sent to tenant");
        assert_eq!(cases[3].ai_status, AI_STATUS_OFFER_READY);
        assert_eq!(
            outcome.message(),
            "Processed 2 renewal cases. Manager review queue updated."
        );
    }

    #[test]
    fn test_bulk_process_idempotent() {
        let mut cases = pipeline();
        bulk_process(&mut cases);
        let snapshot = cases.clone();
        assert_eq!(bulk_process(&mut cases).count, 0);
        assert_eq!(cases, snapshot);
    }

    #[test]
    fn test_notices_count_threshold_inclusive() {
        let mut cases = pipeline();
        cases.push(case("U-090", 90, STAGE_90_PLUS, "Offer ready"));
        cases.push(case("U-089", 89, STAGE_60_90, "Offer ready"));
        let outcome = count_notices_due(&cases);
        assert_eq!(outcome.count, 2);
        assert_eq!(
            outcome.message(),
            "Sent 2 automated 90-day notices. Awaiting manager sign-off logs."
        );
    }
}
