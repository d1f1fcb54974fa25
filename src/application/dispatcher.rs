//! Event dispatcher - fans one domain event out to live subscribers.
//!
//! # Event Flow
//!
//! ```text
//! channel message (JSON)
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │ parse, read `type`  │  malformed → log + drop
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │ resolve URIs        │  embedded `uris` verbatim, else mapper
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │ per URI:            │  registry failure on one URI does not
//! │  get_subscribers    │  block the others
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │ per subscriber:     │
//! │  sink.deliver(…)    │
//! └─────────────────────┘
//! ```
//!
//! One message is processed fully before the next is read from the
//! channel, so notification order follows event order.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::domain::{map_to_uris, Notification, ResourceUri};
use crate::ports::NotificationSink;

use super::registry::SubscriptionRegistry;

/// Fans domain events out to the live subscribers of each affected URI.
pub struct EventDispatcher {
    registry: Arc<SubscriptionRegistry>,
    sink: Arc<dyn NotificationSink>,
}

impl EventDispatcher {
    pub fn new(registry: Arc<SubscriptionRegistry>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { registry, sink }
    }

    /// Process one raw channel message to completion.
    ///
    /// Never panics and never returns an error: every failure mode is
    /// logged and contained so the listener loop survives arbitrary input.
    pub async fn handle_event(&self, raw: &str) {
        let message: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(%error, "dropping malformed channel message");
                return;
            }
        };

        let event_type = message
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        let timestamp = message
            .get("timestamp")
            .and_then(Value::as_i64)
            .unwrap_or_else(|| Utc::now().timestamp_millis());

        let uris = resolve_uris(&message, event_type);
        if uris.is_empty() {
            // An empty list is a no-op, never "notify everyone".
            tracing::debug!(event_type, "event affects no watchable resource");
            return;
        }

        for uri in &uris {
            let subscribers = match self.registry.get_subscribers(uri).await {
                Ok(subscribers) => subscribers,
                Err(error) => {
                    // Isolate per-URI failures: the remaining URIs of this
                    // event still get dispatched.
                    tracing::warn!(uri = %uri, %error, "subscriber lookup failed");
                    continue;
                }
            };

            for session_id in subscribers {
                let notification = Notification {
                    session_id: session_id.clone(),
                    uri: uri.clone(),
                    event_type: event_type.to_string(),
                    timestamp,
                };
                if let Err(error) = self.sink.deliver(notification).await {
                    tracing::warn!(
                        session_id = %session_id,
                        uri = %uri,
                        %error,
                        "notification delivery failed"
                    );
                }
            }
        }
    }
}

/// URIs affected by `message`: an embedded `uris` array is used verbatim,
/// otherwise the event type and payload go through the mapper.
fn resolve_uris(message: &Value, event_type: &str) -> Vec<ResourceUri> {
    if let Some(embedded) = message.get("uris").and_then(Value::as_array) {
        embedded
            .iter()
            .filter_map(Value::as_str)
            .map(ResourceUri::from)
            .collect()
    } else {
        map_to_uris(event_type, message).into_iter().collect()
    }
}
