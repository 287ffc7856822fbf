//! Activation input and the active alert record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// Time-of-day format captured on activation (`HH:MM:SS`, local clock).
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Raw body of `POST /activate_alert`.
///
/// Coordinates stay as loose JSON values because clients send them either as
/// numbers or as numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivationRequest {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

/// A validated activation.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub student_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ActivationRequest {
    /// Validate the request into an [`Activation`].
    ///
    /// Any absent, null or blank field yields [`CoreError::MissingData`].
    /// The student id is kept exactly as sent; it is a lookup key, not text.
    /// A coordinate that is present but not a finite number yields
    /// [`CoreError::Validation`].
    pub fn validate(&self) -> Result<Activation, CoreError> {
        let student_id = self
            .student_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(CoreError::MissingData)?;

        if is_missing(self.latitude.as_ref()) || is_missing(self.longitude.as_ref()) {
            return Err(CoreError::MissingData);
        }

        Ok(Activation {
            student_id: student_id.to_string(),
            latitude: parse_coordinate("latitude", self.latitude.as_ref())?,
            longitude: parse_coordinate("longitude", self.longitude.as_ref())?,
        })
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn parse_coordinate(field: &str, value: Option<&Value>) -> Result<f64, CoreError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoreError::Validation(format!("{field} must be a number")))
}

/// The most recent alert reported for a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub student_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Wall-clock time of day the alert was raised, `HH:MM:SS`.
    pub timestamp: String,
    pub display_name: String,
}

impl AlertRecord {
    pub fn new(activation: &Activation, display_name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            student_id: activation.student_id.clone(),
            latitude: activation.latitude,
            longitude: activation.longitude,
            timestamp: timestamp.into(),
            display_name: display_name.into(),
        }
    }
}

/// Current local time of day formatted with [`TIMESTAMP_FORMAT`].
pub fn current_time_of_day() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
