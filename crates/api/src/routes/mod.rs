pub mod alerts;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Routes are mounted at the root to keep the paths the client and dashboard
/// pages already call:
///
/// ```text
/// GET    /                              student activation page
/// GET    /dashboard                     dispatch dashboard page
/// GET    /health                        liveness + active alert count
///
/// POST   /activate_alert                activate (or replace) an alert
/// GET    /alert_status                  all active alerts
/// POST   /resolve_alert/{student_id}    resolve an alert
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(health::router())
        .merge(alerts::router())
}
