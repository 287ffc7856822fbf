//! Presentation pages. The HTML is static and compiled into the binary.

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

const CLIENT_TEMPLATE: &str = include_str!("../../templates/client.html");
const DASHBOARD_TEMPLATE: &str = include_str!("../../templates/dashboard.html");

/// Placeholder substituted with the student id in the client page.
const STUDENT_ID_PLACEHOLDER: &str = "{{student_id}}";

/// GET /
///
/// Student activation page, bound to the configured demo student.
pub async fn student_client(State(state): State<AppState>) -> Html<String> {
    Html(render_client(&state.config.demo_student_id))
}

/// GET /dashboard
pub async fn dispatch_dashboard() -> Html<&'static str> {
    Html(DASHBOARD_TEMPLATE)
}

fn render_client(student_id: &str) -> String {
    CLIENT_TEMPLATE.replace(STUDENT_ID_PLACEHOLDER, &escape_html(student_id))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
