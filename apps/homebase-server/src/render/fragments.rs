//! htmx fragments: swapped into pages, never full documents

use property_store::AgentState;
use shared_types::{ActivityItem, ReraAnalysis, Ticket, Vendor};

use super::{escape_html, group_thousands};
use crate::locale::{LabelPack, Lang};

/// Poll interval for the live widgets on the dashboard
const POLL_EVERY: &str = "every 5s";

pub fn agent_status_chip(pack: &LabelPack, agent: &AgentState) -> String {
    let key = agent.status.label_key();
    format!(
        r#"<div id="agent-status" class="agent-chip status-{key}" hx-get="/hx/agent/status?lang={lang}" hx-trigger="{poll}" hx-swap="outerHTML">
  <span class="dot"></span>
  <span class="agent-label">{title}: <strong>{status}</strong></span>
  <span class="agent-meta">{actions} · {response}s</span>
</div>"#,
        key = key,
        lang = pack.lang,
        poll = POLL_EVERY,
        title = escape_html(pack.labels.ai_status),
        status = escape_html(pack.labels.status(key)),
        actions = agent.actions_today,
        response = agent.response_time_seconds,
    )
}

pub fn activity_feed(items: &[ActivityItem]) -> String {
    let rows = items
        .iter()
        .map(|item| {
            format!(
                r#"  <li class="activity-item"><span class="time">{time}</span> {text}</li>"#,
                time = escape_html(&item.timestamp),
                text = escape_html(&item.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<ul class="activity-feed">
{rows}
</ul>"#)
}

pub fn vendor_assignment_result(ticket: &Ticket, vendor: &Vendor, pack: &LabelPack) -> String {
    format!(
        r#"<div class="alert success assignment-result">
  <strong>{vendor}</strong> → {ticket_id} ({unit})
  <p>{status}: {stage} · {availability}</p>
  <p class="muted">{gate}</p>
</div>"#,
        vendor = escape_html(&vendor.name),
        ticket_id = escape_html(&ticket.ticket_id),
        unit = escape_html(&ticket.unit),
        status = escape_html(pack.labels.ai_status),
        stage = escape_html(ticket.current_status()),
        availability = vendor.availability,
        gate = escape_html(pack.labels.human_gate),
    )
}

/// Stage-by-stage progress for one ticket, with a button to advance it
pub fn ticket_timeline(ticket: &Ticket, lang: Lang) -> String {
    let steps = ticket
        .statuses
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let state = if i < ticket.status_index {
                "done"
            } else if i == ticket.status_index {
                "current"
            } else {
                "pending"
            };
            format!(
                r#"    <li class="step {state}">{stage}</li>"#,
                state = state,
                stage = escape_html(stage),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let advance = if ticket.is_resolved() {
        String::new()
    } else {
        format!(
            r##"<button class="btn" hx-get="/hx/tickets/{id}/timeline?lang={lang}" hx-target="#ticket-timeline" hx-swap="innerHTML">Advance</button>"##,
            id = escape_html(&ticket.ticket_id),
            lang = lang,
        )
    };

    format!(
        r#"<div class="timeline" data-ticket="{id}">
  <ol class="steps">
{steps}
  </ol>
  <p class="sla">SLA: {sla} min · {vendor}</p>
  {advance}
</div>"#,
        id = escape_html(&ticket.ticket_id),
        steps = steps,
        sla = ticket.sla_minutes_remaining,
        vendor = escape_html(&ticket.vendor_name),
        advance = advance,
    )
}

pub fn rera_result(analysis: &ReraAnalysis, pack: &LabelPack) -> String {
    let labels = &pack.labels.rera;
    let (class, verdict) = if analysis.compliant {
        ("success", pack.labels.rera_badge)
    } else {
        ("danger", labels.exceeds_cap)
    };
    format!(
        r#"<div id="rera-result" class="rera-result {class}">
  <p class="verdict">{verdict}</p>
  <table class="rera-table">
    <tr><th>{h_current}</th><td>AED {current}</td></tr>
    <tr><th>{h_market}</th><td>AED {market}</td></tr>
    <tr><th>{h_proposed}</th><td>AED {proposed}</td></tr>
    <tr><th>{h_vs_market}</th><td>{vs_market:.1}%</td></tr>
    <tr><th>{h_max_pct}</th><td>{max_pct:.1}%</td></tr>
    <tr><th>{h_max_rent}</th><td>AED {max_rent}</td></tr>
    <tr><th>{h_recommended}</th><td>AED {recommended}</td></tr>
  </table>
  <p class="muted">{source} · {updated_at}</p>
</div>"#,
        class = class,
        verdict = escape_html(verdict),
        h_current = escape_html(labels.current_rent),
        h_market = escape_html(labels.market_average),
        h_proposed = escape_html(labels.proposed_rent),
        h_vs_market = escape_html(labels.vs_market),
        h_max_pct = escape_html(labels.max_increase),
        h_max_rent = escape_html(labels.max_rent),
        h_recommended = escape_html(labels.recommended_rent),
        current = group_thousands(analysis.current_rent_aed),
        market = group_thousands(analysis.market_average_aed),
        proposed = group_thousands(analysis.proposed_rent_aed),
        vs_market = analysis.your_vs_market_pct,
        max_pct = analysis.max_allowed_increase_pct,
        max_rent = group_thousands(analysis.max_allowed_rent_aed),
        recommended = group_thousands(analysis.recommended_rent_aed),
        source = escape_html(&analysis.source),
        updated_at = escape_html(&analysis.updated_at),
    )
}

/// Toast flavour for batch action results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
        }
    }
}

pub fn toast(kind: ToastKind, message: &str) -> String {
    format!(
        r#"<div class="toast {class}" role="status">{message}</div>"#,
        class = kind.class(),
        message = escape_html(message),
    )
}

pub fn mobile_nav_content(title: &str, lines: &[&str]) -> String {
    let items = lines
        .iter()
        .map(|line| format!("    <li>{}</li>", escape_html(line)))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<section class="mobile-tab">
  <h3>{title}</h3>
  <ul>
{items}
  </ul>
</section>"#,
        title = escape_html(title),
        items = items,
    )
}

/// Error body carrying the machine-readable code
pub fn error_alert(code: &str, message: &str) -> String {
    format!(
        r#"<div class="alert danger" role="alert" data-code="{code}"><strong>{code}</strong> {message}</div>"#,
        code = escape_html(code),
        message = escape_html(message),
    )
}
