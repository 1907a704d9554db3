//! Router assembly

pub mod hx;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

/// All page and fragment routes, without middleware or static files
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::root))
        .route("/health", get(pages::handle_health))
        .route("/dashboard", get(pages::dashboard))
        // Maintenance
        .route("/maintenance/reasoning", get(pages::maintenance_reasoning))
        .route("/maintenance/vendors", get(pages::maintenance_vendors))
        .route("/maintenance/ticket/:ticket_id", get(pages::maintenance_ticket))
        // Renewals
        .route("/renewals/pipeline", get(pages::renewals_pipeline))
        .route("/renewals/rera/:unit_id", get(pages::renewals_rera))
        .route("/renewals/offer/:unit_id", get(pages::renewals_offer))
        .route(
            "/renewals/communication/:tenant_id",
            get(pages::renewals_communication),
        )
        // Everything else
        .route("/ai/multi-issue", get(pages::multi_issue))
        .route("/properties/control-panel", get(pages::properties_control_panel))
        .route("/vendors/compliance", get(pages::vendors_compliance))
        .route("/foundations", get(pages::foundations))
        .route("/mobile/whatsapp", get(pages::mobile_whatsapp))
        .route("/mobile/dashboard", get(pages::mobile_dashboard))
        .route("/mobile/ticket/:ticket_id", get(pages::mobile_ticket))
        .route("/analytics", get(pages::analytics))
        .route("/settings", get(pages::settings))
        .nest("/hx", hx::router())
        .with_state(state)
}
