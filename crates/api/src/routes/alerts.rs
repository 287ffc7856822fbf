//! Route definitions for alert activation, polling and resolution.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// ```text
/// POST   /activate_alert                -> activate_alert
/// GET    /alert_status                  -> alert_status
/// POST   /resolve_alert/{student_id}    -> resolve_alert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activate_alert", post(alerts::activate_alert))
        .route("/alert_status", get(alerts::alert_status))
        .route("/resolve_alert/{student_id}", post(alerts::resolve_alert))
}
