pub mod error;
pub mod types;

pub use error::{DomainError, DomainResult};
pub use types::{
    ActivityItem, Availability, ChequeSchedule, ComplianceRecord, ContractDraft, Keyed,
    RenewalCase, ReraAnalysis, Ticket, Vendor, AI_STATUS_OFFER_READY, AI_STATUS_RERA_PENDING,
    RENEWAL_STAGES, STAGE_30_60, STAGE_60_90, STAGE_90_PLUS, STAGE_UNDER_30, TICKET_STATUSES,
};
