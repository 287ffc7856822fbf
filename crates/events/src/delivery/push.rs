//! Best-effort push notification delivery.
//!
//! [`Push`] is the provider payload. [`PushTransport`] performs one HTTP hop
//! and reports failures; [`PushNotifier`] sits in front of it and swallows
//! them, so callers never observe a delivery error.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PushKind {
    Note,
    Link,
}

/// Where a push is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PushTarget {
    /// A single guardian, addressed by email.
    Email(String),
    /// A broadcast channel (e.g. security dispatch).
    ChannelTag(String),
}

impl PushTarget {
    /// Route a destination string: anything containing `@` is an email,
    /// everything else is a channel tag.
    pub fn route(destination: &str) -> Self {
        if destination.contains('@') {
            Self::Email(destination.to_string())
        } else {
            Self::ChannelTag(destination.to_string())
        }
    }
}

/// JSON body sent to the provider's push-creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Push {
    #[serde(rename = "type")]
    pub kind: PushKind,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub target: PushTarget,
}

impl Push {
    /// Build a push. A `url` turns it into a link push.
    pub fn new(
        destination: &str,
        title: impl Into<String>,
        body: impl Into<String>,
        url: Option<&str>,
    ) -> Self {
        Self {
            kind: if url.is_some() {
                PushKind::Link
            } else {
                PushKind::Note
            },
            title: title.into(),
            body: body.into(),
            url: url.map(str::to_string),
            target: PushTarget::route(destination),
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for push delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Push provider returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// A single outbound delivery to the push provider.
#[async_trait]
pub trait PushTransport: Send + Sync {
    async fn post(&self, push: &Push) -> Result<(), PushError>;
}

// ---------------------------------------------------------------------------
// PushNotifier
// ---------------------------------------------------------------------------

/// Sends pushes through a [`PushTransport`], logging and dropping failures.
#[derive(Clone)]
pub struct PushNotifier {
    transport: Arc<dyn PushTransport>,
}

impl PushNotifier {
    pub fn new(transport: Arc<dyn PushTransport>) -> Self {
        Self { transport }
    }

    /// Send one notification. Never fails; returns whether it was delivered.
    ///
    /// Calls are independent, so a caller fanning out to several
    /// destinations can drive them concurrently.
    pub async fn send(
        &self,
        destination: &str,
        title: &str,
        body: &str,
        url: Option<&str>,
    ) -> bool {
        let push = Push::new(destination, title, body, url);
        match self.transport.post(&push).await {
            Ok(()) => {
                tracing::debug!(target_kind = ?push.target, title = %push.title, "Push delivered");
                true
            }
            Err(e) => {
                tracing::warn!(target_kind = ?push.target, error = %e, "Push delivery failed");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
