//! Shared response envelope for alert endpoints.
//!
//! Every non-listing response is `{ "status": ..., "message": ... }`, with a
//! machine-readable `code` added on errors. Use [`StatusResponse`] instead of
//! ad-hoc `serde_json::json!` bodies.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// `"success"` or `"error"`.
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
            code: None,
        }
    }

    pub fn error(message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status: "error",
            message: message.into(),
            code: Some(code),
        }
    }
}
