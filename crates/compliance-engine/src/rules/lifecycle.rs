// Maintenance ticket stage progression and SLA countdown
use shared_types::Ticket;

/// Minutes taken off the SLA countdown on every advance
pub const SLA_STEP_MINUTES: u32 = 2;

/// Index of the "Assigned" stage
pub const ASSIGNED_INDEX: usize = 1;

/// Move a ticket one stage forward.
///
/// Saturates at the terminal stage. The SLA countdown drops by
/// [`SLA_STEP_MINUTES`] on every call, independently of the stage, and never
/// goes below zero.
pub fn advance_ticket(ticket: &mut Ticket) {
    if ticket.status_index < ticket.terminal_index() {
        ticket.status_index += 1;
    }
    ticket.sla_minutes_remaining = ticket.sla_minutes_remaining.saturating_sub(SLA_STEP_MINUTES);
}

/// Raise a ticket to at least the "Assigned" stage; never moves it back
pub fn mark_assigned(ticket: &mut Ticket) {
    let target = ASSIGNED_INDEX.min(ticket.terminal_index());
    if ticket.status_index < target {
        ticket.status_index = target;
    }
}
