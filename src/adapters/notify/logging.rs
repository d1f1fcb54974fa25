//! Sink that logs each notification descriptor.
//!
//! Stands in for the real delivery transport in the worker binary: every
//! descriptor the dispatcher produces is visible in the structured logs,
//! and swapping in a real transport is a one-line wiring change.

use async_trait::async_trait;

use crate::domain::Notification;
use crate::ports::{DeliveryError, NotificationSink};

/// Logs every descriptor at `info` level.
#[derive(Debug, Default)]
pub struct LoggingSink;

impl LoggingSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for LoggingSink {
    async fn deliver(&self, notification: Notification) -> Result<(), DeliveryError> {
        tracing::info!(
            session_id = %notification.session_id,
            uri = %notification.uri,
            event_type = %notification.event_type,
            timestamp = notification.timestamp,
            "notification"
        );
        Ok(())
    }
}
