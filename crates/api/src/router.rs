//! Application router with its middleware stack.
//!
//! [`build_app_router`] is shared by `main.rs` and the integration tests so
//! both run behind identical layers.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the application [`Router`].
///
/// Layers, outermost first: CORS, request id assignment, request tracing,
/// request id propagation, timeout (408), panic recovery (500).
///
/// The timeout bounds the whole activation, including the push fan-out, so
/// it should stay above the push provider timeout.
pub fn build_app_router(state: AppState) -> Router {
    let config = state.config.clone();
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    routes::app_routes()
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(&config))
        .with_state(state)
}

/// CORS for the configured origins.
///
/// The activation page and the dashboard only issue `GET` and JSON `POST`
/// requests, and the relay has no sessions or tokens of its own, so neither
/// credentials nor an `Authorization` header are allowed cross-origin.
///
/// Panics on an unparseable origin so misconfiguration surfaces at startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
