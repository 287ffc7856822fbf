#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use campus_alert_core::{InMemoryAlertStore, StudentDirectory};
use campus_alert_events::{Push, PushConfig, PushError, PushNotifier, PushTransport};
use http_body_util::BodyExt;
use tower::ServiceExt;

use campus_alert_api::config::ServerConfig;
use campus_alert_api::router::build_app_router;
use campus_alert_api::state::AppState;

/// Dispatch channel used by every test config.
pub const TEST_CHANNEL: &str = "test-dispatch";

/// Push transport that records every push and optionally fails them all.
#[derive(Default)]
pub struct RecordingTransport {
    pushes: Mutex<Vec<Push>>,
    fail: bool,
}

impl RecordingTransport {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn pushes(&self) -> Vec<Push> {
        self.pushes.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushTransport for RecordingTransport {
    async fn post(&self, push: &Push) -> Result<(), PushError> {
        self.pushes.lock().unwrap().push(push.clone());
        if self.fail {
            return Err(PushError::HttpStatus(500));
        }
        Ok(())
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        public_base_url: None,
        demo_student_id: "S12345".to_string(),
        directory_path: None,
        push: PushConfig {
            access_token: "test-token".to_string(),
            api_url: "http://127.0.0.1:9/v2/pushes".to_string(),
            dispatch_channel: TEST_CHANNEL.to_string(),
            timeout: std::time::Duration::from_secs(1),
        },
    }
}

/// Build state around the seed directory and the given transport.
pub fn test_state(transport: Arc<RecordingTransport>) -> AppState {
    test_state_with_config(transport, test_config())
}

pub fn test_state_with_config(transport: Arc<RecordingTransport>, config: ServerConfig) -> AppState {
    AppState {
        config: Arc::new(config),
        store: Arc::new(InMemoryAlertStore::new()),
        directory: Arc::new(StudentDirectory::seed()),
        notifier: PushNotifier::new(transport),
    }
}

/// Build the full application router (same middleware stack as production).
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("host", "campus.test")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
