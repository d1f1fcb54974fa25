//! Redis pub/sub listener driving the event dispatcher.
//!
//! Subscribes to the shared `{prefix}.events` channel and feeds every
//! message to [`EventDispatcher::handle_event`]. The loop is the single
//! consumer: one message is handled to completion before the next is
//! pulled, which is what preserves event order end to end.
//!
//! Meant to run as a dedicated long-lived worker task, not inside a
//! request/response cycle.

use std::sync::Arc;

use futures::StreamExt;
use thiserror::Error;

use crate::application::EventDispatcher;

/// Errors establishing the pub/sub subscription.
///
/// Once the stream is up, per-message failures never surface here; they
/// are logged and the loop keeps reading.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("pub/sub connection failed: {0}")]
    Connection(String),

    #[error("channel subscription failed: {0}")]
    Subscribe(String),
}

/// Single-consumer pub/sub loop over one well-known channel.
pub struct RedisEventListener {
    client: redis::Client,
    channel: String,
}

impl RedisEventListener {
    pub fn new(client: redis::Client, channel: impl Into<String>) -> Self {
        Self {
            client,
            channel: channel.into(),
        }
    }

    /// Subscribe and pump messages into the dispatcher.
    ///
    /// Blocks for the life of the subscription. Returns only if the
    /// message stream ends (connection closed by the server) or the
    /// initial subscription fails.
    pub async fn run(&self, dispatcher: Arc<EventDispatcher>) -> Result<(), ListenerError> {
        let conn = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| ListenerError::Connection(e.to_string()))?;
        let mut pubsub = conn.into_pubsub();
        pubsub
            .subscribe(&self.channel)
            .await
            .map_err(|e| ListenerError::Subscribe(e.to_string()))?;

        tracing::info!(channel = %self.channel, "listening for domain events");

        let mut messages = pubsub.on_message();
        while let Some(message) = messages.next().await {
            let payload: String = match message.get_payload() {
                Ok(payload) => payload,
                Err(error) => {
                    tracing::warn!(%error, "dropping non-text channel message");
                    continue;
                }
            };
            // handle_event is crash-isolated; a bad message cannot end
            // this loop.
            dispatcher.handle_event(&payload).await;
        }

        tracing::warn!(channel = %self.channel, "event channel closed");
        Ok(())
    }
}
