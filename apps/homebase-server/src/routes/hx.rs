//! htmx fragment handlers, mounted under `/hx`

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header, HeaderMap, HeaderName},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use time::Duration;
use tracing::{debug, info};
use url::{form_urlencoded, Url};

use crate::error::ServerError;
use crate::locale::{Lang, RequestLang, LANG_COOKIE, LANG_COOKIE_MAX_AGE_SECS};
use crate::render::fragments::{self, ToastKind};
use crate::state::AppState;

/// Items shown per activity feed refresh
const ACTIVITY_FEED_LIMIT: usize = 3;

/// Where the language toggle lands when the referer gives no usable path
const DEFAULT_REDIRECT_PATH: &str = "/dashboard";

/// Base used to resolve relative referers
const REFERER_BASE: &str = "http://homebase.local/";

const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/agent/status", get(agent_status))
        .route("/agent/activity-feed", get(activity_feed))
        .route("/vendors/assign", post(assign_vendor))
        .route("/tickets/:ticket_id/timeline", get(ticket_timeline))
        .route("/rera/calculate", post(rera_calculate))
        .route("/renewals/bulk-process", post(bulk_process))
        .route("/renewals/send-notices", post(send_notices))
        .route("/lang/toggle", post(lang_toggle))
        .route("/mobile/nav/:tab", get(mobile_nav))
}

/// Handler: GET /hx/agent/status
pub async fn agent_status(State(state): State<AppState>, RequestLang(lang): RequestLang) -> Html<String> {
    let agent = state.agent_state().await;
    debug!("Agent status: {:?}", agent.status);
    Html(fragments::agent_status_chip(&lang.pack(), &agent))
}

/// Handler: GET /hx/agent/activity-feed
pub async fn activity_feed(State(state): State<AppState>) -> Html<String> {
    let items = state.activity_slice(ACTIVITY_FEED_LIMIT).await;
    Html(fragments::activity_feed(&items))
}

#[derive(Debug, Deserialize)]
pub struct AssignForm {
    pub ticket_id: String,
    pub vendor_id: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Handler: POST /hx/vendors/assign
pub async fn assign_vendor(
    State(state): State<AppState>,
    form: Result<Form<AssignForm>, FormRejection>,
) -> Result<Html<String>, ServerError> {
    let Form(form) = form?;
    let lang = Lang::normalize(form.lang.as_deref());

    let (ticket, vendor) = state
        .store
        .write()
        .await
        .assign_vendor(&form.ticket_id, &form.vendor_id)?;

    Ok(Html(fragments::vendor_assignment_result(
        &ticket,
        &vendor,
        &lang.pack(),
    )))
}

/// Handler: GET /hx/tickets/:ticket_id/timeline
///
/// Each request moves the ticket one stage forward before rendering.
pub async fn ticket_timeline(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
    RequestLang(lang): RequestLang,
) -> Result<Html<String>, ServerError> {
    let ticket = state.store.write().await.advance_ticket(&ticket_id)?;
    Ok(Html(fragments::ticket_timeline(&ticket, lang)))
}

#[derive(Debug, Deserialize)]
pub struct ReraForm {
    pub unit_id: String,
    pub proposed_rent: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Parse the proposed rent field as a whole number of AED
fn parse_proposed_rent(raw: &str) -> Result<i64, ServerError> {
    raw.trim().parse::<i64>().map_err(|_| {
        ServerError::InvalidRequest(format!(
            "proposed_rent must be a whole number of AED (found: '{}')",
            raw
        ))
    })
}

/// Handler: POST /hx/rera/calculate
pub async fn rera_calculate(
    State(state): State<AppState>,
    form: Result<Form<ReraForm>, FormRejection>,
) -> Result<Html<String>, ServerError> {
    let Form(form) = form?;
    let lang = Lang::normalize(form.lang.as_deref());
    let proposed = parse_proposed_rent(&form.proposed_rent)?;

    let analysis = state.store.read().await.calculate_rera(&form.unit_id, proposed)?;
    Ok(Html(fragments::rera_result(&analysis, &lang.pack())))
}

/// Handler: POST /hx/renewals/bulk-process
pub async fn bulk_process(State(state): State<AppState>) -> Html<String> {
    let outcome = state.store.write().await.bulk_process_renewals();
    Html(fragments::toast(ToastKind::Success, &outcome.message()))
}

/// Handler: POST /hx/renewals/send-notices
pub async fn send_notices(State(state): State<AppState>) -> Html<String> {
    let outcome = state.store.read().await.send_notices();
    Html(fragments::toast(ToastKind::Info, &outcome.message()))
}

#[derive(Debug, Deserialize)]
pub struct LangToggleForm {
    pub lang: String,
}

/// Rebuild the referer as a path plus query with `lang` set.
///
/// Only the path and query of an http(s) referer survive; scheme and host are
/// dropped. Blank query values are dropped. An existing `lang` pair keeps its
/// position, otherwise it is appended. Repeated keys collapse to their last
/// value.
pub fn toggle_redirect_target(referer: Option<&str>, lang: Lang) -> String {
    let parsed = referer.and_then(|r| {
        Url::parse(r)
            .or_else(|_| Url::parse(REFERER_BASE).and_then(|base| base.join(r)))
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    });

    let (path, pairs): (String, Vec<(String, String)>) = match &parsed {
        Some(url) => (
            url.path().to_string(),
            url.query_pairs()
                .into_owned()
                .filter(|(_, value)| !value.is_empty())
                .collect(),
        ),
        None => (DEFAULT_REDIRECT_PATH.to_string(), Vec::new()),
    };

    let mut query: Vec<(String, String)> = Vec::new();
    for (key, value) in pairs {
        match query.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => query.push((key, value)),
        }
    }
    match query.iter_mut().find(|(k, _)| k == "lang") {
        Some(existing) => existing.1 = lang.code().to_string(),
        None => query.push(("lang".to_string(), lang.code().to_string())),
    }

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query.iter())
        .finish();
    format!("{}?{}", path, encoded)
}

/// Handler: POST /hx/lang/toggle
///
/// Empty body; htmx follows the `HX-Redirect` header. The choice is
/// remembered in the `lang` cookie.
pub async fn lang_toggle(
    headers: HeaderMap,
    jar: CookieJar,
    form: Result<Form<LangToggleForm>, FormRejection>,
) -> Result<Response, ServerError> {
    let Form(form) = form?;
    let lang = Lang::normalize(Some(form.lang.as_str()));
    let referer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());
    let target = toggle_redirect_target(referer, lang);
    let cookie = Cookie::build((LANG_COOKIE, lang.code()))
        .path("/")
        .max_age(Duration::seconds(LANG_COOKIE_MAX_AGE_SECS));

    info!("Language set to {} -> {}", lang, target);
    Ok((jar.add(cookie), [(HX_REDIRECT, target)], "").into_response())
}

/// Content of one mobile navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileTab {
    pub title: &'static str,
    pub lines: [&'static str; 2],
}

impl MobileTab {
    pub const TICKETS: MobileTab = MobileTab {
        title: "Active Tickets",
        lines: ["M-1247 AC Repair - In Progress", "M-1289 Plumbing Leak - Assigned"],
    };
    pub const RENEWALS: MobileTab = MobileTab {
        title: "Renewal Queue",
        lines: ["Unit 402 - 62 days - Offer pending", "Unit 111 - 14 days - Critical follow-up"],
    };
    pub const AI: MobileTab = MobileTab {
        title: "AI Actions",
        lines: ["Checking RERA index", "Drafting bilingual renewal offer"],
    };

    /// Case-insensitive tab lookup; unknown tabs show tickets
    pub fn resolve(tab: &str) -> Self {
        match tab.to_lowercase().as_str() {
            "renewals" => Self::RENEWALS,
            "ai" => Self::AI,
            _ => Self::TICKETS,
        }
    }
}

/// Handler: GET /hx/mobile/nav/:tab
pub async fn mobile_nav(Path(tab): Path<String>) -> Html<String> {
    let content = MobileTab::resolve(&tab);
    Html(fragments::mobile_nav_content(content.title, &content.lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_keeps_path_and_replaces_lang_in_place() {
        let target = toggle_redirect_target(
            Some("http://localhost:8000/renewals/pipeline?lang=en&tab=all"),
            Lang::Ar,
        );
        assert_eq!(target, "/renewals/pipeline?lang=ar&tab=all");
    }

    #[test]
    fn test_redirect_appends_lang() {
        let target = toggle_redirect_target(Some("http://localhost/maintenance/vendors?x=1"), Lang::En);
        assert_eq!(target, "/maintenance/vendors?x=1&lang=en");
    }

    #[test]
    fn test_redirect_without_referer_goes_to_dashboard() {
        assert_eq!(toggle_redirect_target(None, Lang::Ar), "/dashboard?lang=ar");
    }

    #[test]
    fn test_redirect_accepts_relative_referer() {
        assert_eq!(
            toggle_redirect_target(Some("/settings?lang=ar"), Lang::En),
            "/settings?lang=en"
        );
    }

    #[test]
    fn test_redirect_collapses_repeated_keys() {
        let target = toggle_redirect_target(Some("http://h/analytics?a=1&a=2"), Lang::En);
        assert_eq!(target, "/analytics?a=2&lang=en");
    }

    #[test]
    fn test_redirect_drops_blank_values() {
        let target = toggle_redirect_target(Some("http://h/analytics?q=&x=1&lang="), Lang::Ar);
        assert_eq!(target, "/analytics?x=1&lang=ar");
    }

    #[test]
    fn test_redirect_ignores_non_http_referer() {
        assert_eq!(
            toggle_redirect_target(Some("javascript:alert(1)"), Lang::En),
            "/dashboard?lang=en"
        );
    }

    #[test]
    fn test_mobile_tab_resolution() {
        assert_eq!(MobileTab::resolve("AI"), MobileTab::AI);
        assert_eq!(MobileTab::resolve("renewals"), MobileTab::RENEWALS);
        assert_eq!(MobileTab::resolve("unknown"), MobileTab::TICKETS);
    }

    #[test]
    fn test_parse_proposed_rent() {
        assert_eq!(parse_proposed_rent(" 87000 ").unwrap(), 87000);
        assert!(matches!(
            parse_proposed_rent("87k"),
            Err(ServerError::InvalidRequest(_))
        ));
    }
}
