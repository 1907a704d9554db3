//! Seed data for the demo portfolio
//!
//! The built-in fixture mirrors a small Dubai portfolio: two open maintenance
//! tickets, four vendors, four renewal cases (one per pipeline stage), one
//! drafted contract, vendor compliance records and a quarterly cheque plan.
//! A JSON file with the same shape can replace it at startup.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shared_types::{
    ActivityItem, Availability, ChequeSchedule, ComplianceRecord, ContractDraft, RenewalCase, Ticket, Vendor,
    AI_STATUS_OFFER_READY, AI_STATUS_RERA_PENDING, STAGE_30_60, STAGE_60_90, STAGE_90_PLUS, STAGE_UNDER_30,
    TICKET_STATUSES,
};

/// Every record the store starts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub activity_log: Vec<ActivityItem>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
    #[serde(default)]
    pub renewals: Vec<RenewalCase>,
    #[serde(default)]
    pub contracts: Vec<ContractDraft>,
    #[serde(default)]
    pub compliance: Vec<ComplianceRecord>,
    #[serde(default)]
    pub cheque_schedules: Vec<ChequeSchedule>,
}

impl Fixture {
    /// Read a fixture from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
    }

    /// The built-in demo portfolio
    pub fn builtin() -> Self {
        Self {
            activity_log: vec![
                ActivityItem::new("Checking RERA rental index for Unit 402...", "14:32"),
                ActivityItem::new("Assigning plumber to Al Barsha South...", "14:33"),
                ActivityItem::new("Generating renewal contract for Tenant Sara Ahmad...", "14:34"),
                ActivityItem::new("Syncing Ejari registration data for Marina Tower A-809...", "14:35"),
                ActivityItem::new("Escalating electrical ticket #M-1289 to senior vendor...", "14:36"),
                ActivityItem::new("Preparing 90-day renewal notices for JBR portfolio...", "14:37"),
            ],
            tickets: vec![
                ticket(
                    "M-1247",
                    "AC Repair",
                    "Unit 402",
                    "Al Barsha",
                    2,
                    83,
                    "Sara Ahmad",
                    "Ahmad HVAC",
                    "Medium",
                    "Priority: Medium. Tenant comfort issue. No safety risk.",
                ),
                ticket(
                    "M-1289",
                    "Plumbing Leak",
                    "Unit 809",
                    "Dubai Marina",
                    1,
                    57,
                    "Rashid Khan",
                    "Marina Plumbers",
                    "High",
                    "Potential water damage risk. Escalated for immediate attendance.",
                ),
            ],
            vendors: vec![
                Vendor {
                    vendor_id: "V-HVAC-01".to_string(),
                    name: "Ahmad HVAC".to_string(),
                    specialty: "HVAC".to_string(),
                    area: "Al Barsha".to_string(),
                    availability: Availability::Available,
                    response_minutes: 38,
                    rating: 4.8,
                    jobs_completed: 231,
                    ai_recommended: true,
                    latitude: 25.103,
                    longitude: 55.193,
                    license_days_left: 186,
                    insurance_valid: true,
                    emirates_id_verified: true,
                    trade_license_verified: true,
                },
                Vendor {
                    vendor_id: "V-PLB-11".to_string(),
                    name: "Marina Plumbers".to_string(),
                    specialty: "Plumbing".to_string(),
                    area: "Dubai Marina".to_string(),
                    availability: Availability::Busy,
                    response_minutes: 55,
                    rating: 4.6,
                    jobs_completed: 198,
                    ai_recommended: false,
                    latitude: 25.081,
                    longitude: 55.141,
                    license_days_left: 15,
                    insurance_valid: true,
                    emirates_id_verified: true,
                    trade_license_verified: true,
                },
                Vendor {
                    vendor_id: "V-ELC-02".to_string(),
                    name: "JBR Electric".to_string(),
                    specialty: "Electrical".to_string(),
                    area: "JBR".to_string(),
                    availability: Availability::Available,
                    response_minutes: 42,
                    rating: 4.7,
                    jobs_completed: 164,
                    ai_recommended: false,
                    latitude: 25.079,
                    longitude: 55.136,
                    license_days_left: 244,
                    insurance_valid: false,
                    emirates_id_verified: true,
                    trade_license_verified: true,
                },
                Vendor {
                    vendor_id: "V-GEN-05".to_string(),
                    name: "Emirates Facility Team".to_string(),
                    specialty: "General".to_string(),
                    area: "Al Barsha".to_string(),
                    availability: Availability::Available,
                    response_minutes: 61,
                    rating: 4.5,
                    jobs_completed: 422,
                    ai_recommended: false,
                    latitude: 25.111,
                    longitude: 55.207,
                    license_days_left: 92,
                    insurance_valid: true,
                    emirates_id_verified: true,
                    trade_license_verified: true,
                },
            ],
            renewals: vec![
                renewal(
                    "U-402",
                    "Unit 402",
                    "Sara Ahmad",
                    85000,
                    "15/04/2026",
                    62,
                    STAGE_60_90,
                    AI_STATUS_RERA_PENDING,
                    "Al Barsha South",
                    "2BR apartment",
                    82000,
                    4.2,
                ),
                renewal(
                    "U-809",
                    "Unit 809",
                    "Ahmed Farooq",
                    120000,
                    "29/03/2026",
                    45,
                    STAGE_30_60,
                    AI_STATUS_OFFER_READY,
                    "Dubai Marina",
                    "2BR apartment",
                    118000,
                    5.0,
                ),
                renewal(
                    "U-111",
                    "Unit 111",
                    "Nadia Omar",
                    98000,
                    "21/02/2026",
                    14,
                    STAGE_UNDER_30,
                    "Sent to tenant",
                    "JBR",
                    "1BR apartment",
                    101000,
                    3.5,
                ),
                renewal(
                    "U-210",
                    "Unit 210",
                    "Zaid Malik",
                    77000,
                    "28/07/2026",
                    166,
                    STAGE_90_PLUS,
                    AI_STATUS_RERA_PENDING,
                    "Al Barsha",
                    "1BR apartment",
                    79000,
                    4.0,
                ),
            ],
            contracts: vec![ContractDraft {
                unit_id: "U-402".to_string(),
                contract_id: "R-402-2026".to_string(),
                tenant_name: "Sara Ahmad".to_string(),
                unit: "Unit 402".to_string(),
                start_date: "16/04/2026".to_string(),
                end_date: "15/04/2027".to_string(),
                rent_aed: 87000,
                generated_seconds: 12,
            }],
            compliance: vec![
                compliance("Ahmad HVAC", true, 93, "None"),
                compliance("Marina Plumbers", true, 89, "Trade license expires in 15 days"),
                compliance("JBR Electric", false, 77, "Insurance renewal required"),
            ],
            cheque_schedules: vec![ChequeSchedule {
                unit: "Unit 402".to_string(),
                cheque_dates: vec![
                    "16/04/2026".to_string(),
                    "16/07/2026".to_string(),
                    "16/10/2026".to_string(),
                    "16/01/2027".to_string(),
                ],
                cheque_amounts_aed: vec![21750, 21750, 21750, 21750],
            }],
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    ticket_id: &str,
    title: &str,
    unit: &str,
    area: &str,
    status_index: usize,
    sla_minutes_remaining: u32,
    tenant_name: &str,
    vendor_name: &str,
    priority: &str,
    notes: &str,
) -> Ticket {
    Ticket {
        ticket_id: ticket_id.to_string(),
        title: title.to_string(),
        unit: unit.to_string(),
        area: area.to_string(),
        statuses: TICKET_STATUSES.iter().map(|s| s.to_string()).collect(),
        status_index,
        sla_minutes_remaining,
        tenant_name: tenant_name.to_string(),
        vendor_name: vendor_name.to_string(),
        priority: priority.to_string(),
        notes: notes.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn renewal(
    unit_id: &str,
    unit: &str,
    tenant_name: &str,
    current_rent_aed: i64,
    expiry_date: &str,
    days_out: u32,
    stage: &str,
    ai_status: &str,
    area: &str,
    bedrooms: &str,
    market_average_aed: i64,
    max_allowed_increase_pct: f64,
) -> RenewalCase {
    RenewalCase {
        unit_id: unit_id.to_string(),
        unit: unit.to_string(),
        tenant_name: tenant_name.to_string(),
        current_rent_aed,
        expiry_date: expiry_date.to_string(),
        days_out,
        stage: stage.to_string(),
        ai_status: ai_status.to_string(),
        area: area.to_string(),
        bedrooms: bedrooms.to_string(),
        market_average_aed,
        max_allowed_increase_pct,
    }
}

fn compliance(vendor_name: &str, insurance: bool, ai_score: u8, alert: &str) -> ComplianceRecord {
    ComplianceRecord {
        vendor_name: vendor_name.to_string(),
        emirates_id: true,
        trade_license: true,
        insurance,
        ai_score,
        alert: alert.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let fixture = Fixture::builtin();
        assert_eq!(fixture.activity_log.len(), 6);
        assert_eq!(fixture.tickets.len(), 2);
        assert_eq!(fixture.vendors.len(), 4);
        assert_eq!(fixture.renewals.len(), 4);
        assert_eq!(fixture.contracts.len(), 1);
        assert_eq!(fixture.compliance.len(), 3);
        assert_eq!(fixture.cheque_schedules.len(), 1);
    }

    #[test]
    fn test_builtin_has_single_recommendation() {
        let fixture = Fixture::builtin();
        let recommended: Vec<_> = fixture.vendors.iter().filter(|v| v.ai_recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].vendor_id, "V-HVAC-01");
    }

    #[test]
    fn test_fixture_loads_from_json_file() {
        let dir = std::env::temp_dir().join(format!("homebase-seed-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("seed.json");
        std::fs::write(&path, serde_json::to_string_pretty(&Fixture::builtin()).unwrap()).unwrap();

        let loaded = Fixture::from_json_file(&path).unwrap();
        let builtin = Fixture::builtin();
        assert_eq!(loaded.tickets, builtin.tickets);
        assert_eq!(loaded.contracts, builtin.contracts);
        assert_eq!(loaded.activity_log, builtin.activity_log);
        assert_eq!(loaded.renewals.len(), builtin.renewals.len());
        assert_eq!(loaded.vendors[1].availability, Availability::Busy);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_fixture_defaults_missing_sections() {
        let fixture: Fixture = serde_json::from_str(r#"{"tickets": []}"#).unwrap();
        assert!(fixture.vendors.is_empty());
        assert!(fixture.activity_log.is_empty());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Fixture::from_json_file(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seed.json"));
    }
}
