//! Subscription and event-channel configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Subscription index and event-channel configuration
///
/// The key prefix namespaces everything this service touches in the shared
/// store, and must match the prefix used by the services publishing events
/// and creating subscriptions.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// Prefix for subscription keys and the event channel
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Sliding session liveness window in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
}

impl EventsConfig {
    /// Get the session TTL as Duration
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Validate event configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key_prefix.is_empty() {
            return Err(ValidationError::EmptyKeyPrefix);
        }
        if self.session_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            session_ttl_secs: default_session_ttl(),
        }
    }
}

fn default_key_prefix() -> String {
    "boardwatch".to_string()
}

fn default_session_ttl() -> u64 {
    24 * 60 * 60
}
