//! Notification text for alert fan-out.

/// A rendered notification, ready to hand to a push sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub title: String,
    pub body: String,
    pub url: String,
}

/// Map-viewer deep link centred on the given coordinates.
pub fn map_link(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={latitude},{longitude}")
}

/// Message for the security dispatch channel. Links to the dashboard.
pub fn dispatch_message(
    display_name: &str,
    student_id: &str,
    time_of_day: &str,
    dashboard_url: &str,
) -> AlertMessage {
    AlertMessage {
        title: format!("🚨 CRITICAL GAS ALERT: {display_name} ({student_id})"),
        body: format!("Student activated alert at {time_of_day}. Click to view on map dashboard."),
        url: dashboard_url.to_string(),
    }
}

/// Message for each guardian. Links to the student's location.
pub fn guardian_message(display_name: &str, time_of_day: &str, map_url: &str) -> AlertMessage {
    AlertMessage {
        title: format!("⚠️ {display_name} Needs Help NOW!"),
        body: format!(
            "URGENT: {display_name} activated a safety alert at {time_of_day}. Click for their current location."
        ),
        url: map_url.to_string(),
    }
}
