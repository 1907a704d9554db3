use std::fmt;

/// Canonical renewal stage labels, in pipeline display order.
pub const STAGE_90_PLUS: &str = "90+ Days Out";
pub const STAGE_60_90: &str = "60-90 Days";
pub const STAGE_30_60: &str = "30-60 Days";
pub const STAGE_UNDER_30: &str = "<30 Days";

pub const RENEWAL_STAGES: [&str; 4] = [STAGE_90_PLUS, STAGE_60_90, STAGE_30_60, STAGE_UNDER_30];

/// AI status labels the bulk processor transitions between.
pub const AI_STATUS_RERA_PENDING: &str = "RERA check pending";
pub const AI_STATUS_OFFER_READY: &str = "Offer ready";

/// Stages every maintenance ticket moves through.
pub const TICKET_STATUSES: [&str; 5] = ["Reported", "Assigned", "En Route", "In Progress", "Resolved"];

/// Records addressable by a unique string key inside the store.
pub trait Keyed {
    /// Human-readable record kind used in error messages ("ticket", "vendor", ...)
    const KIND: &'static str;

    fn key(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub title: String,
    pub unit: String,
    pub area: String,
    pub statuses: Vec<String>, // Ordered, at least two stages
    pub status_index: usize,
    pub sla_minutes_remaining: u32,
    pub tenant_name: String,
    pub vendor_name: String,
    pub priority: String,
    pub notes: String,
}

impl Ticket {
    /// Name of the stage the ticket is currently in
    pub fn current_status(&self) -> &str {
        self.statuses
            .get(self.status_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Index of the final stage
    pub fn terminal_index(&self) -> usize {
        self.statuses.len().saturating_sub(1)
    }

    pub fn is_resolved(&self) -> bool {
        self.status_index >= self.terminal_index()
    }
}

impl Keyed for Ticket {
    const KIND: &'static str = "ticket";

    fn key(&self) -> &str {
        &self.ticket_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::Busy => write!(f, "busy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vendor {
    pub vendor_id: String,
    pub name: String,
    pub specialty: String,
    pub area: String,
    pub availability: Availability,
    pub response_minutes: u32,
    pub rating: f64,
    pub jobs_completed: u32,
    pub ai_recommended: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub license_days_left: u32,
    pub insurance_valid: bool,
    pub emirates_id_verified: bool,
    pub trade_license_verified: bool,
}

impl Vendor {
    /// All three compliance documents are on file
    pub fn fully_compliant(&self) -> bool {
        self.insurance_valid && self.emirates_id_verified && self.trade_license_verified
    }
}

impl Keyed for Vendor {
    const KIND: &'static str = "vendor";

    fn key(&self) -> &str {
        &self.vendor_id
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenewalCase {
    pub unit_id: String, // Store key, e.g. "U-402"
    pub unit: String,    // Display label, e.g. "Unit 402"
    pub tenant_name: String,
    pub current_rent_aed: i64,
    pub expiry_date: String, // dd/mm/yyyy, display only
    pub days_out: u32,
    pub stage: String,
    pub ai_status: String,
    pub area: String,
    pub bedrooms: String,
    pub market_average_aed: i64,
    pub max_allowed_increase_pct: f64,
}

impl Keyed for RenewalCase {
    const KIND: &'static str = "renewal";

    fn key(&self) -> &str {
        &self.unit_id
    }
}

/// Result of a rent compliance check. Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReraAnalysis {
    pub current_rent_aed: i64,
    pub market_average_aed: i64,
    pub proposed_rent_aed: i64,
    pub your_vs_market_pct: f64,
    pub max_allowed_increase_pct: f64,
    pub max_allowed_rent_aed: i64,
    pub recommended_rent_aed: i64,
    pub compliant: bool,
    pub updated_at: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContractDraft {
    pub unit_id: String,
    pub contract_id: String,
    pub tenant_name: String,
    pub unit: String,
    pub start_date: String,
    pub end_date: String,
    pub rent_aed: i64,
    pub generated_seconds: u32,
}

impl Keyed for ContractDraft {
    const KIND: &'static str = "contract";

    fn key(&self) -> &str {
        &self.unit_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceRecord {
    pub vendor_name: String,
    pub emirates_id: bool,
    pub trade_license: bool,
    pub insurance: bool,
    pub ai_score: u8,
    pub alert: String,
}

impl Keyed for ComplianceRecord {
    const KIND: &'static str = "compliance record";

    fn key(&self) -> &str {
        &self.vendor_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChequeSchedule {
    pub unit: String,
    pub cheque_dates: Vec<String>,
    pub cheque_amounts_aed: Vec<i64>,
}

impl ChequeSchedule {
    pub fn total_aed(&self) -> i64 {
        self.cheque_amounts_aed.iter().sum()
    }
}

impl Keyed for ChequeSchedule {
    const KIND: &'static str = "cheque schedule";

    fn key(&self) -> &str {
        &self.unit
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityItem {
    pub text: String,
    pub timestamp: String, // HH:MM
}

impl ActivityItem {
    pub fn new(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(index: usize) -> Ticket {
        Ticket {
            ticket_id: "M-1".to_string(),
            title: "AC Repair".to_string(),
            unit: "Unit 1".to_string(),
            area: "Al Barsha".to_string(),
            statuses: TICKET_STATUSES.iter().map(|s| s.to_string()).collect(),
            status_index: index,
            sla_minutes_remaining: 10,
            tenant_name: "Tenant".to_string(),
            vendor_name: "Vendor".to_string(),
            priority: "Low".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_current_status_follows_index() {
        assert_eq!(ticket(0).current_status(), "Reported");
        assert_eq!(ticket(2).current_status(), "En Route");
        assert_eq!(ticket(4).current_status(), "Resolved");
    }

    #[test]
    fn test_terminal_index_and_resolution() {
        assert_eq!(ticket(0).terminal_index(), 4);
        assert!(!ticket(3).is_resolved());
        assert!(ticket(4).is_resolved());
    }

    #[test]
    fn test_availability_serializes_lowercase() {
        let json = serde_json::to_string(&Availability::Busy).unwrap();
        assert_eq!(json, "\"busy\"");
        assert_eq!(Availability::Available.to_string(), "available");
    }

    #[test]
    fn test_cheque_schedule_total() {
        let schedule = ChequeSchedule {
            unit: "Unit 402".to_string(),
            cheque_dates: vec!["16/04/2026".to_string(), "16/07/2026".to_string()],
            cheque_amounts_aed: vec![21750, 21750],
        };
        assert_eq!(schedule.total_aed(), 43500);
        assert_eq!(schedule.key(), "Unit 402");
    }
}
