//! Integration tests for the health check, presentation pages and general
//! HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{body_json, body_text, get, post_json, RecordingTransport};
use serde_json::json;

fn app() -> axum::Router {
    common::build_test_app(common::test_state(Arc::new(RecordingTransport::default())))
}

// ---------------------------------------------------------------------------
// Test: GET /health reports version and active alert count
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_counts_active_alerts() {
    let app = app();

    let json = body_json(get(app.clone(), "/health").await).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["active_alerts"], 0);

    post_json(
        app.clone(),
        "/activate_alert",
        json!({"student_id": "S12345", "latitude": 1.0, "longitude": 2.0}),
    )
    .await;

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["active_alerts"], 1);
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(app(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: presentation pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn client_page_is_bound_to_demo_student() {
    let response = get(app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = body_text(response).await;
    assert!(html.contains("\"S12345\""));
}

#[tokio::test]
async fn dashboard_page_polls_alert_status() {
    let response = get(app(), "/dashboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("/alert_status"));
}

// ---------------------------------------------------------------------------
// Test: wrong method on a known route
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_on_activate_is_method_not_allowed() {
    let response = get(app(), "/activate_alert").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight allows the configured origin without credentials
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_origin_without_credentials() {
    let request = axum::http::Request::builder()
        .method(axum::http::Method::OPTIONS)
        .uri("/activate_alert")
        .header("origin", "http://localhost:5000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app(), request).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:5000"
    );
    assert!(headers.get("access-control-allow-credentials").is_none());
}
