use std::sync::Arc;

use campus_alert_core::{AlertStore, StudentDirectory};
use campus_alert_events::PushNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Active alerts, one per student.
    pub store: Arc<dyn AlertStore>,
    /// Read-only student names and guardian contacts.
    pub directory: Arc<StudentDirectory>,
    /// Best-effort push sender for dispatch and guardian notifications.
    pub notifier: PushNotifier,
}
