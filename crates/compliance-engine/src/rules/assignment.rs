// Vendor-to-ticket assignment
use crate::rules::lifecycle::mark_assigned;
use shared_types::{Availability, DomainError, DomainResult, Keyed, Ticket, Vendor};

/// Assign `vendor_id` to `ticket`.
///
/// The vendor must exist in `vendors`; it is looked up before anything is
/// touched. On success the ticket carries the vendor's name and is at least
/// "Assigned", the vendor is busy, and the AI recommendation is recomputed
/// across the whole collection so that only the assigned vendor holds it.
/// Returns the position of the assigned vendor in `vendors`.
pub fn assign_vendor(ticket: &mut Ticket, vendors: &mut [Vendor], vendor_id: &str) -> DomainResult<usize> {
    let position = vendors
        .iter()
        .position(|v| v.vendor_id == vendor_id)
        .ok_or_else(|| DomainError::not_found(Vendor::KIND, vendor_id))?;

    ticket.vendor_name = vendors[position].name.clone();
    mark_assigned(ticket);

    vendors[position].availability = Availability::Busy;
    for (i, vendor) in vendors.iter_mut().enumerate() {
        vendor.ai_recommended = i == position;
    }

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::TICKET_STATUSES;

    fn vendor(id: &str, name: &str, recommended: bool) -> Vendor {
        Vendor {
            vendor_id: id.to_string(),
            name: name.to_string(),
            specialty: "General".to_string(),
            area: "JBR".to_string(),
            availability: Availability::Available,
            response_minutes: 40,
            rating: 4.5,
            jobs_completed: 100,
            ai_recommended: recommended,
            latitude: 25.0,
            longitude: 55.0,
            license_days_left: 100,
            insurance_valid: true,
            emirates_id_verified: true,
            trade_license_verified: true,
        }
    }

    fn vendors() -> Vec<Vendor> {
        vec![
            vendor("V-1", "Ahmad HVAC", true),
            vendor("V-2", "Marina Plumbers", false),
            vendor("V-3", "JBR Electric", false),
            vendor("V-4", "Emirates Facility Team", false),
        ]
    }

    fn ticket(status_index: usize) -> Ticket {
        Ticket {
            ticket_id: "M-1289".to_string(),
            title: "Plumbing Leak".to_string(),
            unit: "Unit 809".to_string(),
            area: "Dubai Marina".to_string(),
            statuses: TICKET_STATUSES.iter().map(|s| s.to_string()).collect(),
            status_index,
            sla_minutes_remaining: 57,
            tenant_name: "Rashid Khan".to_string(),
            vendor_name: "Marina Plumbers".to_string(),
            priority: "High".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_assignment_updates_ticket_and_vendor() {
        let mut t = ticket(0);
        let mut vs = vendors();
        let pos = assign_vendor(&mut t, &mut vs, "V-3").unwrap();

        assert_eq!(pos, 2);
        assert_eq!(t.vendor_name, "JBR Electric");
        assert_eq!(t.current_status(), "Assigned");
        assert_eq!(vs[2].availability, Availability::Busy);
        let recommended: Vec<_> = vs.iter().filter(|v| v.ai_recommended).map(|v| v.vendor_id.as_str()).collect();
        assert_eq!(recommended, vec!["V-3"]);
    }

    #[test]
    fn test_assignment_keeps_later_stage() {
        let mut t = ticket(3);
        let mut vs = vendors();
        assign_vendor(&mut t, &mut vs, "V-2").unwrap();
        assert_eq!(t.current_status(), "In Progress");
    }

    #[test]
    fn test_unknown_vendor_mutates_nothing() {
        let mut t = ticket(0);
        let mut vs = vendors();
        let before_ticket = t.clone();
        let before_vendors = vs.clone();

        let err = assign_vendor(&mut t, &mut vs, "V-404").unwrap_err();
        assert_eq!(err, DomainError::not_found("vendor", "V-404"));
        assert_eq!(t, before_ticket);
        assert_eq!(vs, before_vendors);
    }

    proptest! {
        /// Property: after any sequence of assignments exactly one vendor is recommended
        #[test]
        fn exactly_one_recommended(picks in prop::collection::vec(0usize..4, 1..10)) {
            let mut t = ticket(0);
            let mut vs = vendors();
            for pick in &picks {
                let id = vs[*pick].vendor_id.clone();
                assign_vendor(&mut t, &mut vs, &id).unwrap();
            }
            let last = &vs[*picks.last().unwrap()];
            let recommended: Vec<_> = vs.iter().filter(|v| v.ai_recommended).collect();
            prop_assert_eq!(recommended.len(), 1);
            prop_assert_eq!(&recommended[0].vendor_id, &last.vendor_id);
        }
    }
}
