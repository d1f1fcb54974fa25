//! Recording sink for testing.
//!
//! Captures every delivered descriptor for assertions, the counterpart of
//! the in-memory set store.
//!
//! # Panics
//!
//! Methods may panic if the internal lock is poisoned. Acceptable for test
//! code; do not use in production.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{Notification, SessionId};
use crate::ports::{DeliveryError, NotificationSink};

/// Captures delivered notifications for test assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    delivered: RwLock<Vec<Notification>>,
}

impl RecordingSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self {
            delivered: RwLock::new(Vec::new()),
        }
    }

    /// All captured notifications, in delivery order.
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered
            .read()
            .expect("RecordingSink: lock poisoned")
            .clone()
    }

    /// Captured notifications addressed to one session.
    pub fn delivered_to(&self, session: &SessionId) -> Vec<Notification> {
        self.delivered()
            .into_iter()
            .filter(|n| &n.session_id == session)
            .collect()
    }

    /// Clears captured notifications (for test isolation).
    pub fn clear(&self) {
        self.delivered
            .write()
            .expect("RecordingSink: lock poisoned")
            .clear();
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn deliver(&self, notification: Notification) -> Result<(), DeliveryError> {
        self.delivered
            .write()
            .expect("RecordingSink: lock poisoned")
            .push(notification);
        Ok(())
    }
}
