use std::net::SocketAddr;
use std::sync::Arc;

use campus_alert_core::{InMemoryAlertStore, StudentDirectory};
use campus_alert_events::{PushNotifier, PushbulletClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus_alert_api::config::ServerConfig;
use campus_alert_api::router::build_app_router;
use campus_alert_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus_alert_api=debug,campus_alert_events=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        dispatch_channel = %config.push.dispatch_channel,
        "Loaded server configuration"
    );
    tracing::warn!(
        student_id = %config.demo_student_id,
        "Activation page is bound to a fixed demo student; there is no authentication"
    );

    // --- Student directory ---
    let directory = match &config.directory_path {
        Some(path) => StudentDirectory::load(path).expect("Failed to load student directory"),
        None => StudentDirectory::seed(),
    };
    if directory.is_empty() {
        tracing::warn!("Student directory is empty, every alert will use the fallback name");
    }
    tracing::info!(students = directory.len(), "Student directory loaded");

    // --- Push delivery ---
    let transport =
        PushbulletClient::new(&config.push).expect("Failed to build push HTTP client");
    let notifier = PushNotifier::new(Arc::new(transport));

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::new(InMemoryAlertStore::new()),
        directory: Arc::new(directory),
        notifier,
    };

    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Resolve on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
