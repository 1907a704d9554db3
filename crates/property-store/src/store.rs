//! The property-operations record store
//!
//! One `PropertyStore` is built at startup and shared by every request
//! handler. Lookups fail with `DomainError::NotFound` for unknown keys, and
//! mutating operations validate every key before changing anything.

use std::path::Path;

use anyhow::Result;
use compliance_engine::rules::{assignment, lifecycle, renewals};
use compliance_engine::{BatchOutcome, ComplianceEngine, StageBuckets};
use shared_types::{
    ActivityItem, ChequeSchedule, ComplianceRecord, ContractDraft, DomainError, DomainResult, Keyed, RenewalCase,
    ReraAnalysis, Ticket, Vendor,
};
use tracing::{debug, info};

use crate::registry::Registry;
use crate::seed::Fixture;

pub struct PropertyStore {
    tickets: Registry<Ticket>,
    vendors: Registry<Vendor>,
    renewals: Registry<RenewalCase>,
    contracts: Registry<ContractDraft>,
    compliance: Registry<ComplianceRecord>,
    cheque_schedules: Registry<ChequeSchedule>,
    activity_log: Vec<ActivityItem>, // Newest first
    engine: ComplianceEngine,
}

impl PropertyStore {
    /// Store seeded with the built-in demo portfolio
    pub fn seeded() -> DomainResult<Self> {
        Self::from_fixture(Fixture::builtin())
    }

    /// Store seeded from a JSON fixture on disk
    pub fn from_fixture_file(path: &Path) -> Result<Self> {
        let fixture = Fixture::from_json_file(path)?;
        Ok(Self::from_fixture(fixture)?)
    }

    pub fn from_fixture(fixture: Fixture) -> DomainResult<Self> {
        for ticket in &fixture.tickets {
            validate_ticket(ticket)?;
        }
        let recommended = fixture.vendors.iter().filter(|v| v.ai_recommended).count();
        if recommended > 1 {
            return Err(DomainError::InvalidInput(format!(
                "At most one vendor may be AI recommended (found: {})",
                recommended
            )));
        }

        let store = Self {
            tickets: Registry::from_records(fixture.tickets)?,
            vendors: Registry::from_records(fixture.vendors)?,
            renewals: Registry::from_records(fixture.renewals)?,
            contracts: Registry::from_records(fixture.contracts)?,
            compliance: Registry::from_records(fixture.compliance)?,
            cheque_schedules: Registry::from_records(fixture.cheque_schedules)?,
            activity_log: fixture.activity_log,
            engine: ComplianceEngine::new(),
        };

        info!(
            tickets = store.tickets.len(),
            vendors = store.vendors.len(),
            renewals = store.renewals.len(),
            "Property store seeded"
        );
        Ok(store)
    }

    // ----------------------------------------------------------------
    // Maintenance
    // ----------------------------------------------------------------

    pub fn tickets(&self) -> &[Ticket] {
        self.tickets.as_slice()
    }

    pub fn get_ticket(&self, ticket_id: &str) -> DomainResult<&Ticket> {
        debug!("Ticket lookup: {}", ticket_id);
        self.tickets.get(ticket_id)
    }

    /// Move a ticket one stage forward and tick its SLA countdown
    pub fn advance_ticket(&mut self, ticket_id: &str) -> DomainResult<Ticket> {
        let ticket = self.tickets.get_mut(ticket_id)?;
        lifecycle::advance_ticket(ticket);
        info!(
            "Ticket {} advanced to '{}' (SLA {} min)",
            ticket.ticket_id,
            ticket.current_status(),
            ticket.sla_minutes_remaining
        );
        Ok(ticket.clone())
    }

    pub fn vendors(&self) -> &[Vendor] {
        self.vendors.as_slice()
    }

    pub fn get_vendor(&self, vendor_id: &str) -> DomainResult<&Vendor> {
        self.vendors.get(vendor_id)
    }

    /// Assign a vendor to a ticket and log the action.
    ///
    /// Both keys are checked before any record changes. Returns snapshots of
    /// the updated ticket and vendor.
    pub fn assign_vendor(&mut self, ticket_id: &str, vendor_id: &str) -> DomainResult<(Ticket, Vendor)> {
        let ticket = self.tickets.get_mut(ticket_id)?;
        if !self.vendors.contains(vendor_id) {
            return Err(DomainError::not_found(Vendor::KIND, vendor_id));
        }
        let position = assignment::assign_vendor(ticket, self.vendors.as_mut_slice(), vendor_id)?;

        let ticket = ticket.clone();
        let vendor = self.vendors.as_slice()[position].clone();

        let entry = ActivityItem::new(
            format!(
                "AI-assisted assignment: {} -> {} ({})",
                vendor.name, ticket.ticket_id, ticket.unit
            ),
            chrono::Local::now().format("%H:%M").to_string(),
        );
        info!("{}", entry.text);
        self.activity_log.insert(0, entry);

        Ok((ticket, vendor))
    }

    pub fn compliance_records(&self) -> &[ComplianceRecord] {
        self.compliance.as_slice()
    }

    // ----------------------------------------------------------------
    // Renewals
    // ----------------------------------------------------------------

    pub fn renewals(&self) -> &[RenewalCase] {
        self.renewals.as_slice()
    }

    pub fn get_renewal(&self, unit_id: &str) -> DomainResult<&RenewalCase> {
        self.renewals.get(unit_id)
    }

    pub fn renewals_by_stage(&self) -> StageBuckets {
        renewals::bucket_by_stage(&self.renewals)
    }

    /// Check a proposed rent for a unit against the RERA cap
    pub fn calculate_rera(&self, unit_id: &str, proposed_rent_aed: i64) -> DomainResult<ReraAnalysis> {
        let renewal = self.renewals.get(unit_id)?;
        let analysis = self.engine.calculate_rera(renewal, proposed_rent_aed)?;
        debug!(
            "RERA check {}: proposed={} max={} compliant={}",
            unit_id, proposed_rent_aed, analysis.max_allowed_rent_aed, analysis.compliant
        );
        Ok(analysis)
    }

    pub fn get_contract(&self, unit_id: &str) -> DomainResult<&ContractDraft> {
        self.contracts.get(unit_id)
    }

    pub fn cheque_schedule(&self, unit: &str) -> DomainResult<&ChequeSchedule> {
        self.cheque_schedules.get(unit)
    }

    /// Move every pending RERA check to "Offer ready"
    pub fn bulk_process_renewals(&mut self) -> BatchOutcome {
        let outcome = renewals::bulk_process(self.renewals.iter_mut());
        info!("Bulk renewal processing transitioned {} cases", outcome.count);
        outcome
    }

    /// Count renewals due a 90-day notice. Changes nothing.
    pub fn send_notices(&self) -> BatchOutcome {
        let outcome = renewals::count_notices_due(&self.renewals);
        info!("{} renewals due a 90-day notice", outcome.count);
        outcome
    }

    // ----------------------------------------------------------------
    // Activity
    // ----------------------------------------------------------------

    pub fn activity_log(&self) -> &[ActivityItem] {
        &self.activity_log
    }
}

fn validate_ticket(ticket: &Ticket) -> DomainResult<()> {
    if ticket.statuses.len() < 2 {
        return Err(DomainError::InvalidInput(format!(
            "Ticket {} needs at least two stages",
            ticket.ticket_id
        )));
    }
    if ticket.status_index >= ticket.statuses.len() {
        return Err(DomainError::InvalidInput(format!(
            "Ticket {} stage index {} is out of range",
            ticket.ticket_id, ticket.status_index
        )));
    }
    Ok(())
}
