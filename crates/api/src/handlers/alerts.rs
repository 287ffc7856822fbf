//! Handlers for alert activation, status polling and resolution.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::HOST;
use axum::http::HeaderMap;
use axum::Json;
use campus_alert_core::store::ActiveAlerts;
use campus_alert_core::{ActivationRequest, CoreError};

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;
use crate::workflow;

/// POST /activate_alert
///
/// Record an alert for the student and notify dispatch and guardians.
/// Returns 400 if any of `student_id`, `latitude`, `longitude` is missing.
pub async fn activate_alert(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ActivationRequest>, JsonRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Json(request) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let activation = request.validate()?;

    let dashboard = dashboard_url(&state.config, &headers);
    workflow::activate(&state, &activation, &dashboard).await;

    Ok(Json(StatusResponse::success(
        "Alert activated and notifications sent.",
    )))
}

/// GET /alert_status
///
/// Every active alert keyed by student id.
pub async fn alert_status(State(state): State<AppState>) -> Json<ActiveAlerts> {
    Json(state.store.snapshot().await)
}

/// POST /resolve_alert/{student_id}
///
/// Remove the student's alert, or 404 if there is none.
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    if state.store.remove(&student_id).await.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Alert",
            id: student_id,
        }));
    }

    tracing::info!(%student_id, "Alert resolved");
    Ok(Json(StatusResponse::success(format!(
        "Alert for {student_id} resolved."
    ))))
}

/// Absolute URL of the dispatch dashboard.
///
/// Prefers the configured public base URL, then the request `Host` header,
/// then the local bind port.
pub fn dashboard_url(config: &ServerConfig, headers: &HeaderMap) -> String {
    if let Some(base) = &config.public_base_url {
        return format!("{}/dashboard", base.trim_end_matches('/'));
    }

    match headers.get(HOST).and_then(|h| h.to_str().ok()) {
        Some(host) if !host.is_empty() => format!("http://{host}/dashboard"),
        _ => format!("http://localhost:{}/dashboard", config.port),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::HeaderValue;
    use campus_alert_events::PushConfig;

    use super::*;

    fn config(public_base_url: Option<&str>) -> ServerConfig {
        ServerConfig {
            host: "0.0.0.0".into(),
            port: 5000,
            cors_origins: vec![],
            request_timeout_secs: 30,
            public_base_url: public_base_url.map(str::to_string),
            demo_student_id: "S12345".into(),
            directory_path: None,
            push: PushConfig {
                access_token: String::new(),
                api_url: String::new(),
                dispatch_channel: "ops".into(),
                timeout: Duration::from_secs(1),
            },
        }
    }

    #[test]
    fn dashboard_url_prefers_configured_base() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("ignored:8080"));

        assert_eq!(
            dashboard_url(&config(Some("https://alerts.example.edu/")), &headers),
            "https://alerts.example.edu/dashboard"
        );
    }

    #[test]
    fn dashboard_url_uses_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("10.0.0.5:5000"));

        assert_eq!(
            dashboard_url(&config(None), &headers),
            "http://10.0.0.5:5000/dashboard"
        );
    }

    #[test]
    fn dashboard_url_falls_back_to_bind_port() {
        assert_eq!(
            dashboard_url(&config(None), &HeaderMap::new()),
            "http://localhost:5000/dashboard"
        );
    }
}
