//! Page bodies, wrapped by [`super::page`]

use compliance_engine::StageBuckets;
use shared_types::{
    ActivityItem, ChequeSchedule, ComplianceRecord, ContractDraft, RenewalCase, ReraAnalysis, Ticket, Vendor, TICKET_STATUSES,
};

use super::fragments::{self, ToastKind};
use super::{escape_html, group_thousands};
use crate::locale::{LabelPack, Lang};

/// Stages a renewal moves through before Ejari registration
pub const RENEWAL_PIPELINE: [&str; 5] = [
    "RERA Check",
    "Offer Draft",
    "Manager Approval",
    "Tenant Sent",
    "Ejari Ready",
];

/// Headline numbers on the dashboard
#[derive(Debug, Clone, Copy)]
pub struct DashboardKpis {
    pub active_tickets: usize,
    pub pending_renewals: u32,
    pub renewal_countdown_days: u32,
    pub actions_today: u32,
    pub response_time_seconds: u32,
}

/// One row of the properties control panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanelUnit {
    pub unit: String,
    pub building: &'static str,
    pub status: &'static str,
    pub renewal_timeline: &'static str,
}

fn pipeline(stages: &[&str]) -> String {
    stages
        .iter()
        .map(|stage| format!(r#"<li class="pipeline-stage">{}</li>"#, escape_html(stage)))
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn check(ok: bool) -> &'static str {
    if ok {
        "✅"
    } else {
        "❌"
    }
}

pub fn dashboard(pack: &LabelPack, activity: &[ActivityItem], kpis: &DashboardKpis) -> String {
    let labels = pack.labels;
    format!(
        r##"    <section class="kpis">
      <div class="kpi"><span class="kpi-value">{active_tickets}</span><span class="kpi-label">Active tickets</span></div>
      <div class="kpi"><span class="kpi-value">{pending_renewals}</span><span class="kpi-label">Pending renewals</span></div>
      <div class="kpi"><span class="kpi-value">{countdown}</span><span class="kpi-label">Days to next expiry</span></div>
      <div class="kpi"><span class="kpi-value">{actions_today}</span><span class="kpi-label">AI actions today</span></div>
      <div class="kpi"><span class="kpi-value">{response}s</span><span class="kpi-label">{response_label}</span></div>
    </section>
    <section class="card">
      <h2>Activity</h2>
      <p class="muted">{freshness}</p>
      <div id="activity-feed" hx-get="/hx/agent/activity-feed?lang={lang}" hx-trigger="every 5s" hx-swap="innerHTML">
{feed}
      </div>
    </section>
    <section class="card">
      <h2>{maintenance}</h2>
      <ol class="pipeline">
        {maintenance_pipeline}
      </ol>
      <a class="btn" href="/maintenance/reasoning?lang={lang}">Agent reasoning</a>
    </section>
    <section class="card">
      <h2>{renewals}</h2>
      <ol class="pipeline">
        {renewal_pipeline}
      </ol>
      <div class="actions">
        <button class="btn primary" hx-post="/hx/renewals/bulk-process?lang={lang}" hx-target="#batch-result">{process_all}</button>
        <button class="btn" hx-post="/hx/renewals/send-notices?lang={lang}" hx-target="#batch-result">{notices}</button>
      </div>
      <div id="batch-result"></div>
      <p class="saved">{saved_time}</p>
    </section>"##,
        active_tickets = kpis.active_tickets,
        pending_renewals = kpis.pending_renewals,
        countdown = kpis.renewal_countdown_days,
        actions_today = kpis.actions_today,
        response = kpis.response_time_seconds,
        response_label = escape_html(labels.response),
        freshness = escape_html(labels.freshness),
        lang = pack.lang,
        feed = fragments::activity_feed(activity),
        maintenance = escape_html(labels.nav.maintenance),
        maintenance_pipeline = pipeline(&TICKET_STATUSES),
        renewals = escape_html(labels.nav.renewals),
        renewal_pipeline = pipeline(&RENEWAL_PIPELINE),
        process_all = escape_html(labels.process_all),
        notices = escape_html(labels.notices),
        saved_time = escape_html(labels.saved_time),
    )
}

/// Agent reasoning trace: (icon, time, text)
pub fn maintenance_reasoning(steps: &[(&str, &str, &str)]) -> String {
    let rows = steps
        .iter()
        .map(|(icon, time, text)| {
            format!(
                r#"        <li class="reasoning-step"><span class="icon">{icon}</span><span class="time">{time}</span> {text}</li>"#,
                icon = icon,
                time = escape_html(time),
                text = escape_html(text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"    <section class="card">
      <ol class="reasoning">
{rows}
      </ol>
    </section>"#
    )
}

pub fn maintenance_vendors(pack: &LabelPack, ticket: &Ticket, vendors: &[Vendor]) -> String {
    let cards = vendors
        .iter()
        .map(|vendor| {
            let recommended = if vendor.ai_recommended {
                r#"<span class="badge ai">AI recommended</span>"#
            } else {
                ""
            };
            format!(
                r##"      <article class="vendor-card {availability}">
        <h3>{name} {recommended}</h3>
        <p>{specialty} · {area}</p>
        <p>★ {rating:.1} · {jobs} jobs · ~{response} min</p>
        <p class="muted">{availability}</p>
        <form hx-post="/hx/vendors/assign" hx-target="#assignment-result" hx-swap="innerHTML">
          <input type="hidden" name="ticket_id" value="{ticket_id}">
          <input type="hidden" name="vendor_id" value="{vendor_id}">
          <input type="hidden" name="lang" value="{lang}">
          <button type="submit" class="btn primary">{approve}</button>
        </form>
      </article>"##,
                availability = vendor.availability,
                name = escape_html(&vendor.name),
                recommended = recommended,
                specialty = escape_html(&vendor.specialty),
                area = escape_html(&vendor.area),
                rating = vendor.rating,
                jobs = vendor.jobs_completed,
                response = vendor.response_minutes,
                ticket_id = escape_html(&ticket.ticket_id),
                vendor_id = escape_html(&vendor.vendor_id),
                lang = pack.lang,
                approve = escape_html(pack.labels.approve),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"    <section class="card ticket-summary">
      <h2>{ticket_id} · {title}</h2>
      <p>{unit}, {area} · {tenant}</p>
      <p>{priority} · {status}</p>
      <p class="muted">{notes}</p>
    </section>
    <p class="gate">{gate}</p>
    <section class="vendor-grid">
{cards}
    </section>
    <div id="assignment-result"></div>"#,
        ticket_id = escape_html(&ticket.ticket_id),
        title = escape_html(&ticket.title),
        unit = escape_html(&ticket.unit),
        area = escape_html(&ticket.area),
        tenant = escape_html(&ticket.tenant_name),
        priority = escape_html(&ticket.priority),
        status = escape_html(ticket.current_status()),
        notes = escape_html(&ticket.notes),
        gate = escape_html(pack.labels.human_gate),
        cards = cards,
    )
}

pub fn maintenance_ticket(ticket: &Ticket, lang: Lang) -> String {
    format!(
        r#"    <section class="card">
      <h2>{title}</h2>
      <p>{unit}, {area} · {tenant}</p>
      <div id="ticket-timeline">
{timeline}
      </div>
    </section>"#,
        title = escape_html(&ticket.title),
        unit = escape_html(&ticket.unit),
        area = escape_html(&ticket.area),
        tenant = escape_html(&ticket.tenant_name),
        timeline = fragments::ticket_timeline(ticket, lang),
    )
}

pub fn renewals_pipeline(buckets: &StageBuckets, lang: Lang) -> String {
    let columns = buckets
        .iter()
        .map(|bucket| {
            let cards = bucket
                .cases
                .iter()
                .map(|case| {
                    format!(
                        r#"          <a class="renewal-card" href="/renewals/rera/{unit_id}?lang={lang}">
            <strong>{unit}</strong> · {tenant}
            <span>AED {rent} · {days} days · {expiry}</span>
            <span class="ai-status">{ai_status}</span>
          </a>"#,
                        unit_id = escape_html(&case.unit_id),
                        lang = lang,
                        unit = escape_html(&case.unit),
                        tenant = escape_html(&case.tenant_name),
                        rent = group_thousands(case.current_rent_aed),
                        days = case.days_out,
                        expiry = escape_html(&case.expiry_date),
                        ai_status = escape_html(&case.ai_status),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                r#"      <div class="stage-column">
        <h3>{stage} <span class="count">{count}</span></h3>
{cards}
      </div>"#,
                stage = escape_html(&bucket.stage),
                count = bucket.cases.len(),
                cards = cards,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"    <section class="stage-board">
{columns}
    </section>"#
    )
}

pub fn renewals_rera(pack: &LabelPack, renewal: &RenewalCase, analysis: &ReraAnalysis) -> String {
    format!(
        r##"    <section class="card">
      <h2>{unit} · {tenant}</h2>
      <p>{area} · {bedrooms} · {expiry}</p>
      <div id="rera-slot">
{result}
      </div>
      <form class="calculator" hx-post="/hx/rera/calculate" hx-target="#rera-slot" hx-swap="innerHTML">
        <input type="hidden" name="unit_id" value="{unit_id}">
        <input type="hidden" name="lang" value="{lang}">
        <label>AED <input type="number" name="proposed_rent" value="{proposed}" min="1"></label>
        <button type="submit" class="btn primary">Calculate</button>
      </form>
      <a class="btn" href="/renewals/offer/{unit_id}?lang={lang}">{modify}</a>
    </section>"##,
        unit = escape_html(&renewal.unit),
        tenant = escape_html(&renewal.tenant_name),
        area = escape_html(&renewal.area),
        bedrooms = escape_html(&renewal.bedrooms),
        expiry = escape_html(&renewal.expiry_date),
        result = fragments::rera_result(analysis, pack),
        unit_id = escape_html(&renewal.unit_id),
        lang = pack.lang,
        proposed = analysis.proposed_rent_aed,
        modify = escape_html(pack.labels.modify),
    )
}

/// Quarterly cheque plan under the offer, with its total
fn cheque_plan(schedule: &ChequeSchedule) -> String {
    let rows = schedule
        .cheque_dates
        .iter()
        .zip(&schedule.cheque_amounts_aed)
        .map(|(date, amount)| {
            format!(
                "        <tr><td>{}</td><td>AED {}</td></tr>",
                escape_html(date),
                group_thousands(*amount)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"      <table class="cheques">
        <thead><tr><th>Cheque date</th><th>Amount</th></tr></thead>
        <tbody>
{rows}
        </tbody>
        <tfoot><tr><th>Total</th><td>AED {total}</td></tr></tfoot>
      </table>
"#,
        total = group_thousands(schedule.total_aed()),
    )
}

pub fn renewals_offer(
    pack: &LabelPack,
    renewal: &RenewalCase,
    contract: &ContractDraft,
    cheques: Option<&ChequeSchedule>,
) -> String {
    let labels = pack.labels;
    format!(
        r#"    <section class="card offer">
      <h2>{contract_id}</h2>
      <p>{tenant} · {unit}</p>
      <table>
        <tr><th>Current rent</th><td>AED {current}</td></tr>
        <tr><th>Renewal rent</th><td>AED {rent}</td></tr>
        <tr><th>Term</th><td>{start} - {end}</td></tr>
        <tr><th>Status</th><td>{ai_status}</td></tr>
      </table>
{cheques}      <p class="muted">Drafted in {seconds}s · {badge}</p>
      <p class="gate">{gate}</p>
      <div class="actions">
        <button class="btn primary">{approve}</button>
        <a class="btn" href="/renewals/rera/{unit_id}?lang={lang}">{modify}</a>
        <a class="btn" href="/renewals/communication/{unit_id}?lang={lang}">{send}</a>
      </div>
    </section>"#,
        contract_id = escape_html(&contract.contract_id),
        tenant = escape_html(&contract.tenant_name),
        unit = escape_html(&contract.unit),
        current = group_thousands(renewal.current_rent_aed),
        rent = group_thousands(contract.rent_aed),
        start = escape_html(&contract.start_date),
        end = escape_html(&contract.end_date),
        ai_status = escape_html(&renewal.ai_status),
        cheques = cheques.map(cheque_plan).unwrap_or_default(),
        seconds = contract.generated_seconds,
        badge = escape_html(labels.rera_badge),
        gate = escape_html(labels.human_gate),
        approve = escape_html(labels.approve),
        unit_id = escape_html(&renewal.unit_id),
        lang = pack.lang,
        modify = escape_html(labels.modify),
        send = escape_html(labels.send),
    )
}

/// Bilingual message preview for a tenant
pub fn renewals_communication(pack: &LabelPack, tenant_id: &str) -> String {
    format!(
        r#"    <section class="card message-preview">
      <p class="muted">Tenant reference: {tenant_id}</p>
      <div class="message" dir="ltr" lang="en">
        <p>Dear tenant, your tenancy renewal offer is ready. The proposed rent follows the RERA rental index and is registered with Ejari once you accept.</p>
      </div>
      <div class="message" dir="rtl" lang="ar">
        <p>عزيزي المستأجر، عرض تجديد عقد الإيجار الخاص بك جاهز. الإيجار المقترح متوافق مع مؤشر ريرا للإيجارات وسيتم تسجيله في إيجاري عند موافقتك.</p>
      </div>
      <p class="gate">{gate}</p>
      <button class="btn primary">{send}</button>
    </section>"#,
        tenant_id = escape_html(tenant_id),
        gate = escape_html(pack.labels.human_gate),
        send = escape_html(pack.labels.send),
    )
}

pub fn multi_issue() -> String {
    r#"    <section class="card">
      <h2>One message, three issues</h2>
      <blockquote>"The AC is not cooling, the kitchen tap is leaking and I want to ask about my renewal."</blockquote>
      <ol class="reasoning">
        <li>Maintenance (HVAC) → ticket drafted, Ahmad HVAC shortlisted</li>
        <li>Maintenance (Plumbing) → ticket drafted, Marina Plumbers shortlisted</li>
        <li>Renewal enquiry → RERA check queued for Unit 402</li>
      </ol>
    </section>"#
        .to_string()
}

pub fn properties_control_panel(units: &[ControlPanelUnit]) -> String {
    let rows = units
        .iter()
        .map(|u| {
            format!(
                r#"        <tr><td>{unit}</td><td>{building}</td><td>{status}</td><td>{timeline}</td></tr>"#,
                unit = escape_html(&u.unit),
                building = escape_html(u.building),
                status = escape_html(u.status),
                timeline = escape_html(u.renewal_timeline),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"    <section class="card">
      <table class="units">
        <thead><tr><th>Unit</th><th>Building</th><th>Status</th><th>Renewal</th></tr></thead>
        <tbody>
{rows}
        </tbody>
      </table>
    </section>"#
    )
}

pub fn vendors_compliance(vendors: &[Vendor], compliance: &[ComplianceRecord]) -> String {
    let rows = compliance
        .iter()
        .map(|record| {
            let vendor = vendors.iter().find(|v| v.name == record.vendor_name);
            let license_days = vendor
                .map(|v| v.license_days_left.to_string())
                .unwrap_or_else(|| "-".to_string());
            let profile = match vendor {
                Some(v) if v.fully_compliant() => r#"<span class="verified">Verified</span>"#,
                Some(_) => r#"<span class="action-needed">Action needed</span>"#,
                None => "-",
            };
            format!(
                r#"        <tr><td>{name}</td><td>{eid}</td><td>{license}</td><td>{insurance}</td><td>{days}</td><td>{profile}</td><td>{score}</td><td>{alert}</td></tr>"#,
                name = escape_html(&record.vendor_name),
                eid = check(record.emirates_id),
                license = check(record.trade_license),
                insurance = check(record.insurance),
                days = license_days,
                score = record.ai_score,
                alert = escape_html(&record.alert),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"    <section class="card">
      <table class="compliance">
        <thead><tr><th>Vendor</th><th>Emirates ID</th><th>Trade license</th><th>Insurance</th><th>License days left</th><th>Vendor profile</th><th>AI score</th><th>Alert</th></tr></thead>
        <tbody>
{rows}
        </tbody>
      </table>
    </section>"#
    )
}

pub fn foundations(pack: &LabelPack) -> String {
    format!(
        r#"    <section class="card">
      <h2>Components</h2>
      <div class="swatches">
        <span class="swatch primary">Primary</span>
        <span class="swatch success">Success</span>
        <span class="swatch info">Info</span>
        <span class="swatch danger">Danger</span>
      </div>
      <div class="actions">
        <button class="btn primary">{approve}</button>
        <button class="btn">{modify}</button>
      </div>
      {toast_success}
      {toast_info}
      <p><span class="badge">{badge}</span></p>
      <p>Pages render on the server; htmx swaps fragments from <code>/hx</code> in place.</p>
    </section>"#,
        approve = escape_html(pack.labels.approve),
        modify = escape_html(pack.labels.modify),
        toast_success = fragments::toast(ToastKind::Success, "Success toast"),
        toast_info = fragments::toast(ToastKind::Info, "Info toast"),
        badge = escape_html(pack.labels.rera_badge),
    )
}

pub fn mobile_whatsapp() -> String {
    r#"    <section class="phone">
      <div class="chat">
        <p class="bubble in">Salam, the AC in Unit 402 stopped cooling.</p>
        <p class="bubble out">Thanks Sara. Ahmad HVAC is on the way, ticket #M-1247.</p>
        <p class="bubble out" dir="rtl" lang="ar">شكراً سارة. فني التكييف في الطريق، رقم البلاغ M-1247.</p>
      </div>
    </section>"#
        .to_string()
}

pub fn mobile_dashboard(lang: Lang) -> String {
    format!(
        r##"    <section class="phone">
      <nav class="mobile-tabs">
        <button hx-get="/hx/mobile/nav/tickets?lang={lang}" hx-target="#mobile-tab">Tickets</button>
        <button hx-get="/hx/mobile/nav/renewals?lang={lang}" hx-target="#mobile-tab">Renewals</button>
        <button hx-get="/hx/mobile/nav/ai?lang={lang}" hx-target="#mobile-tab">AI</button>
      </nav>
      <div id="mobile-tab" hx-get="/hx/mobile/nav/tickets?lang={lang}" hx-trigger="load"></div>
    </section>"##
    )
}

pub fn mobile_ticket(ticket: &Ticket, lang: Lang) -> String {
    format!(
        r#"    <section class="phone">
      <h2>{ticket_id}</h2>
      <p>{title} · {unit}</p>
      <div id="ticket-timeline">
{timeline}
      </div>
    </section>"#,
        ticket_id = escape_html(&ticket.ticket_id),
        title = escape_html(&ticket.title),
        unit = escape_html(&ticket.unit),
        timeline = fragments::ticket_timeline(ticket, lang),
    )
}

pub fn placeholder(title: &str) -> String {
    format!(
        r#"    <section class="card placeholder">
      <p>{title} is not part of the demo yet.</p>
    </section>"#,
        title = escape_html(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use compliance_engine::rules::renewals::bucket_by_stage;
    use property_store::Fixture;

    #[test]
    fn test_dashboard_wires_batch_actions() {
        let pack = Lang::En.pack();
        let kpis = DashboardKpis {
            active_tickets: 2,
            pending_renewals: 8,
            renewal_countdown_days: 62,
            actions_today: 47,
            response_time_seconds: 8,
        };
        let html = dashboard(&pack, &[ActivityItem::new("Checking RERA", "14:32")], &kpis);
        assert!(html.contains("/hx/renewals/bulk-process?lang=en"));
        assert!(html.contains("/hx/renewals/send-notices?lang=en"));
        assert!(html.contains("Ejari Ready"));
        assert!(html.contains("Checking RERA"));
    }

    #[test]
    fn test_vendor_cards_post_assignment() {
        let fixture = Fixture::builtin();
        let html = maintenance_vendors(&Lang::Ar.pack(), &fixture.tickets[0], &fixture.vendors);
        assert_eq!(html.matches("hx-post=\"/hx/vendors/assign\"").count(), 4);
        assert!(html.contains(r#"name="vendor_id" value="V-GEN-05""#));
        assert!(html.contains(r#"name="lang" value="ar""#));
        assert_eq!(html.matches("AI recommended").count(), 1);
    }

    #[test]
    fn test_pipeline_renders_one_column_per_bucket() {
        let fixture = Fixture::builtin();
        let buckets = bucket_by_stage(&fixture.renewals);
        let html = renewals_pipeline(&buckets, Lang::En);
        assert_eq!(html.matches("stage-column").count(), 4);
        assert!(html.contains("&lt;30 Days"));
        assert!(html.contains("/renewals/rera/U-402?lang=en"));
    }

    #[test]
    fn test_compliance_table_joins_license_days() {
        let fixture = Fixture::builtin();
        let html = vendors_compliance(&fixture.vendors, &fixture.compliance);
        assert!(html.contains("<td>15</td>"));
        assert!(html.contains("Insurance renewal required"));
        assert_eq!(html.matches(r#"class="verified""#).count(), 2);
        assert_eq!(html.matches(r#"class="action-needed""#).count(), 1);
    }

    #[test]
    fn test_offer_lists_cheque_plan_with_total() {
        let fixture = Fixture::builtin();
        let pack = Lang::En.pack();
        let html = renewals_offer(
            &pack,
            &fixture.renewals[0],
            &fixture.contracts[0],
            fixture.cheque_schedules.first(),
        );
        assert_eq!(html.matches("AED 21,750").count(), 4);
        assert!(html.contains("<th>Total</th><td>AED 87,000</td>"));

        let without = renewals_offer(&pack, &fixture.renewals[0], &fixture.contracts[0], None);
        assert!(!without.contains("cheques"));
    }

    #[test]
    fn test_placeholder_escapes_title() {
        assert!(placeholder("<Analytics>").contains("&lt;Analytics&gt;"));
    }
}
