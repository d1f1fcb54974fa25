//! NotificationSink port - Interface to the delivery transport.
//!
//! The dispatcher's job ends at producing notification descriptors; how a
//! descriptor reaches the session's connection (WebSocket push, SSE, a
//! per-session queue) is the transport's concern behind this port.

use async_trait::async_trait;

use crate::domain::Notification;

/// Errors surfaced by the delivery transport.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DeliveryError {
    /// The transport could not accept the descriptor.
    #[error("notification delivery failed: {0}")]
    Failed(String),
}

/// Port for handing notification descriptors to the delivery transport.
///
/// A failed delivery affects only that descriptor; the dispatcher logs the
/// error and keeps going.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Hand one descriptor to the transport.
    async fn deliver(&self, notification: Notification) -> Result<(), DeliveryError>;
}
