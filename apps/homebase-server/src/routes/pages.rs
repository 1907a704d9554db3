//! Full-page handlers

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::error::ServerError;
use crate::locale::{Lang, RequestLang};
use crate::render::pages::{self as body, ControlPanelUnit, DashboardKpis};
use crate::render::{self, NavKey, Shell};
use crate::state::AppState;

/// Ticket the vendor assignment page works on
const FEATURED_TICKET: &str = "M-1247";

/// Proposed rent the RERA page opens with
const DEFAULT_PROPOSED_RENT_AED: i64 = 87000;

/// Units listed on the control panel
const CONTROL_PANEL_UNITS: usize = 50;

const BUILDINGS: [&str; 3] = ["Al Barsha Heights", "JBR Residence", "Marina View"];
const UNIT_STATUSES: [&str; 3] = ["Occupied", "Pending Renewal", "Maintenance"];
const RENEWAL_TIMELINES: [&str; 4] = ["90+", "60-90", "30-60", "<30"];

const REASONING_STEPS: [(&str, &str, &str); 6] = [
    ("🧠", "14:31", "Analyzed message -> Detected: Maintenance (HVAC)"),
    ("📜", "14:31", "Checked tenant history -> No previous AC issues"),
    ("🔎", "14:32", "Searched 5 vendors -> Filtered by <2hr response, Al Barsha"),
    ("✅", "14:32", "Selected vendor: Ahmad HVAC (4.8★, available now)"),
    ("💬", "14:32", "Notified tenant (Arabic) + vendor (WhatsApp)"),
    ("🎫", "14:32", "Created ticket #M-1247"),
];

type PageResult = Result<Html<String>, ServerError>;

async fn shell<'a>(state: &AppState, lang: Lang, title: &'a str, nav_active: NavKey) -> Shell<'a> {
    Shell {
        pack: lang.pack(),
        title,
        nav_active,
        agent: state.agent_state().await,
        today: chrono::Local::now().format("%d/%m/%Y").to_string(),
    }
}

async fn render_page(state: &AppState, lang: Lang, title: &str, nav_active: NavKey, body: String) -> Html<String> {
    let shell = shell(state, lang, title, nav_active).await;
    debug!("Rendering page '{}' ({})", title, lang);
    Html(render::page(&shell, &body))
}

/// Generated listing for the control panel: U-101 .. U-150
pub fn control_panel_units() -> Vec<ControlPanelUnit> {
    (1..=CONTROL_PANEL_UNITS)
        .map(|i| ControlPanelUnit {
            unit: format!("U-{}", 100 + i),
            building: BUILDINGS[i % BUILDINGS.len()],
            status: UNIT_STATUSES[i % UNIT_STATUSES.len()],
            renewal_timeline: RENEWAL_TIMELINES[i % RENEWAL_TIMELINES.len()],
        })
        .collect()
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "homebase-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: GET /
pub async fn root(RequestLang(lang): RequestLang) -> Redirect {
    Redirect::temporary(&format!("/dashboard?lang={}", lang))
}

/// Handler: GET /dashboard
pub async fn dashboard(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    let active_tickets = state.store.read().await.tickets().len();
    let activity = state.activity_slice(3).await;
    let kpis = DashboardKpis {
        active_tickets,
        pending_renewals: 8,
        renewal_countdown_days: 62,
        actions_today: 47,
        response_time_seconds: 8,
    };
    let content = body::dashboard(&lang.pack(), &activity, &kpis);
    render_page(&state, lang, "AI Agent Dashboard", NavKey::Dashboard, content).await
}

/// Handler: GET /maintenance/reasoning
pub async fn maintenance_reasoning(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    let content = body::maintenance_reasoning(&REASONING_STEPS);
    render_page(&state, lang, "Maintenance Agent Reasoning", NavKey::Maintenance, content).await
}

/// Handler: GET /maintenance/vendors
pub async fn maintenance_vendors(State(state): State<AppState>, RequestLang(lang): RequestLang) -> PageResult {
    let content = {
        let store = state.store.read().await;
        let ticket = store.get_ticket(FEATURED_TICKET)?;
        body::maintenance_vendors(&lang.pack(), ticket, store.vendors())
    };
    Ok(render_page(&state, lang, "Vendor Assignment", NavKey::Maintenance, content).await)
}

/// Handler: GET /maintenance/ticket/:ticket_id
pub async fn maintenance_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
    RequestLang(lang): RequestLang,
) -> PageResult {
    let content = {
        let store = state.store.read().await;
        body::maintenance_ticket(store.get_ticket(&ticket_id)?, lang)
    };
    let title = format!("Ticket {}", ticket_id);
    Ok(render_page(&state, lang, &title, NavKey::Maintenance, content).await)
}

/// Handler: GET /renewals/pipeline
pub async fn renewals_pipeline(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    let buckets = state.store.read().await.renewals_by_stage();
    let content = body::renewals_pipeline(&buckets, lang);
    render_page(&state, lang, "Renewal Pipeline", NavKey::Renewals, content).await
}

/// Handler: GET /renewals/rera/:unit_id
pub async fn renewals_rera(
    State(state): State<AppState>,
    Path(unit_id): Path<String>,
    RequestLang(lang): RequestLang,
) -> PageResult {
    let content = {
        let store = state.store.read().await;
        let renewal = store.get_renewal(&unit_id)?;
        let analysis = store.calculate_rera(&unit_id, DEFAULT_PROPOSED_RENT_AED)?;
        body::renewals_rera(&lang.pack(), renewal, &analysis)
    };
    Ok(render_page(&state, lang, "RERA Compliance Engine", NavKey::Renewals, content).await)
}

/// Handler: GET /renewals/offer/:unit_id
pub async fn renewals_offer(
    State(state): State<AppState>,
    Path(unit_id): Path<String>,
    RequestLang(lang): RequestLang,
) -> PageResult {
    let content = {
        let store = state.store.read().await;
        let renewal = store.get_renewal(&unit_id)?;
        let contract = store.get_contract(&unit_id)?;
        // Units without a cheque plan still get an offer
        let cheques = store.cheque_schedule(&renewal.unit).ok();
        body::renewals_offer(&lang.pack(), renewal, contract, cheques)
    };
    Ok(render_page(&state, lang, "AI Renewal Offer", NavKey::Renewals, content).await)
}

/// Handler: GET /renewals/communication/:tenant_id
pub async fn renewals_communication(
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
    RequestLang(lang): RequestLang,
) -> Html<String> {
    let content = body::renewals_communication(&lang.pack(), &tenant_id);
    render_page(&state, lang, "Tenant Renewal Communication", NavKey::Renewals, content).await
}

/// Handler: GET /ai/multi-issue
pub async fn multi_issue(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    render_page(
        &state,
        lang,
        "Multi-Issue Agent Intelligence",
        NavKey::Dashboard,
        body::multi_issue(),
    )
    .await
}

/// Handler: GET /properties/control-panel
pub async fn properties_control_panel(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    let content = body::properties_control_panel(&control_panel_units());
    render_page(
        &state,
        lang,
        "Property Manager Control Panel",
        NavKey::Properties,
        content,
    )
    .await
}

/// Handler: GET /vendors/compliance
pub async fn vendors_compliance(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    let content = {
        let store = state.store.read().await;
        body::vendors_compliance(store.vendors(), store.compliance_records())
    };
    render_page(&state, lang, "Vendor Compliance Tracking", NavKey::Vendors, content).await
}

/// Handler: GET /foundations
pub async fn foundations(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    let content = body::foundations(&lang.pack());
    render_page(&state, lang, "Style Guide & Architecture", NavKey::Settings, content).await
}

/// Handler: GET /mobile/whatsapp
pub async fn mobile_whatsapp(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    render_page(
        &state,
        lang,
        "Mobile WhatsApp Intake",
        NavKey::Maintenance,
        body::mobile_whatsapp(),
    )
    .await
}

/// Handler: GET /mobile/dashboard
pub async fn mobile_dashboard(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    render_page(
        &state,
        lang,
        "Mobile Manager Dashboard",
        NavKey::Dashboard,
        body::mobile_dashboard(lang),
    )
    .await
}

/// Handler: GET /mobile/ticket/:ticket_id
pub async fn mobile_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
    RequestLang(lang): RequestLang,
) -> PageResult {
    let content = {
        let store = state.store.read().await;
        body::mobile_ticket(store.get_ticket(&ticket_id)?, lang)
    };
    Ok(render_page(&state, lang, "Mobile Ticket Status", NavKey::Maintenance, content).await)
}

/// Handler: GET /analytics
pub async fn analytics(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    render_page(&state, lang, "Analytics", NavKey::Analytics, body::placeholder("Analytics")).await
}

/// Handler: GET /settings
pub async fn settings(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    render_page(&state, lang, "Settings", NavKey::Settings, body::placeholder("Settings")).await
}
