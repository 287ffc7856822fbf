//! Alert activation and notification fan-out.

use campus_alert_core::alert::current_time_of_day;
use campus_alert_core::messages::{dispatch_message, guardian_message, map_link};
use campus_alert_core::{Activation, AlertRecord};

use crate::state::AppState;

/// Result of one activation, logged by the workflow and returned to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationOutcome {
    pub record: AlertRecord,
    /// Pushes attempted: one dispatch plus one per guardian.
    pub attempted: usize,
    /// Pushes the provider accepted.
    pub delivered: usize,
}

/// Record the alert and notify dispatch and every guardian.
///
/// The store is updated before any push goes out, and push failures never
/// fail the activation.
pub async fn activate(
    state: &AppState,
    activation: &Activation,
    dashboard_url: &str,
) -> ActivationOutcome {
    let display_name = state.directory.display_name(&activation.student_id);
    let time_of_day = current_time_of_day();

    let record = AlertRecord::new(activation, display_name, time_of_day.as_str());
    if state.store.upsert(record.clone()).await.is_some() {
        tracing::info!(student_id = %activation.student_id, "Replacing existing alert");
    }

    let map_url = map_link(activation.latitude, activation.longitude);
    let guardians = state.directory.guardians(&activation.student_id);

    let dispatch = dispatch_message(
        display_name,
        &activation.student_id,
        &time_of_day,
        dashboard_url,
    );
    let guardian = guardian_message(display_name, &time_of_day, &map_url);

    let mut sends = Vec::with_capacity(guardians.len() + 1);
    sends.push(state.notifier.send(
        &state.config.push.dispatch_channel,
        &dispatch.title,
        &dispatch.body,
        Some(dispatch.url.as_str()),
    ));
    for email in guardians {
        sends.push(state.notifier.send(
            email,
            &guardian.title,
            &guardian.body,
            Some(guardian.url.as_str()),
        ));
    }

    let attempted = sends.len();
    let delivered = futures::future::join_all(sends)
        .await
        .into_iter()
        .filter(|delivered| *delivered)
        .count();

    tracing::info!(
        student_id = %activation.student_id,
        latitude = activation.latitude,
        longitude = activation.longitude,
        guardians = guardians.len(),
        attempted,
        delivered,
        "Alert activated"
    );

    ActivationOutcome {
        record,
        attempted,
        delivered,
    }
}
