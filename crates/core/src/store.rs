//! Storage for currently active alerts.
//!
//! [`AlertStore`] is the seam handlers depend on; [`InMemoryAlertStore`] is the
//! process-local implementation. One record per student id, last write wins,
//! no expiry.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::alert::AlertRecord;

/// Active alerts keyed by student id.
pub type ActiveAlerts = HashMap<String, AlertRecord>;

#[async_trait]
pub trait AlertStore: Send + Sync {
    /// Insert or replace the alert for `record.student_id`.
    ///
    /// Returns the record it replaced, if any.
    async fn upsert(&self, record: AlertRecord) -> Option<AlertRecord>;

    /// Remove the alert for a student. Returns `None` if there was none.
    async fn remove(&self, student_id: &str) -> Option<AlertRecord>;

    /// A copy of every active alert.
    async fn snapshot(&self) -> ActiveAlerts;

    async fn len(&self) -> usize;
}

/// Process-local alert store guarded by an `RwLock`.
#[derive(Default)]
pub struct InMemoryAlertStore {
    alerts: RwLock<ActiveAlerts>,
}

impl InMemoryAlertStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AlertStore for InMemoryAlertStore {
    async fn upsert(&self, record: AlertRecord) -> Option<AlertRecord> {
        self.alerts
            .write()
            .await
            .insert(record.student_id.clone(), record)
    }

    async fn remove(&self, student_id: &str) -> Option<AlertRecord> {
        self.alerts.write().await.remove(student_id)
    }

    async fn snapshot(&self) -> ActiveAlerts {
        self.alerts.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.alerts.read().await.len()
    }
}
