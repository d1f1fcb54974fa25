//! Store key derivation for the subscription indexes.
//!
//! Key layout is shared with other services reading the same store, so the
//! exact formats here are a compatibility contract:
//!
//! - by-URI index:     `{prefix}:subscriptions:{base64(uri)}`
//! - by-session index: `{prefix}:session:{sessionId}:uris`
//! - event channel:    `{prefix}.events`
//!
//! URIs are base64-encoded (standard alphabet, padded) because they contain
//! `:` and `/`, which would collide with the key separator convention.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::{ResourceUri, SessionId};

/// Derives store keys and the channel name from a configured prefix.
#[derive(Debug, Clone)]
pub struct KeySchema {
    prefix: String,
}

impl KeySchema {
    /// Create a schema for the given key prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Key holding the set of session ids subscribed to `uri`.
    pub fn uri_key(&self, uri: &ResourceUri) -> String {
        format!(
            "{}:subscriptions:{}",
            self.prefix,
            STANDARD.encode(uri.as_str())
        )
    }

    /// Key holding the set of URIs watched by `session`.
    ///
    /// This key doubles as the session's liveness marker: its TTL defines
    /// whether the session is still considered live.
    pub fn session_key(&self, session: &SessionId) -> String {
        format!("{}:session:{}:uris", self.prefix, session)
    }

    /// Pub/sub channel carrying domain events.
    pub fn channel(&self) -> String {
        format!("{}.events", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_key_base64_encodes_the_uri() {
        let keys = KeySchema::new("boardwatch");
        let uri = ResourceUri::board("b1");
        // base64("taskboard://boards/b1") == "dGFza2JvYXJkOi8vYm9hcmRzL2Ix"
        assert_eq!(
            keys.uri_key(&uri),
            "boardwatch:subscriptions:dGFza2JvYXJkOi8vYm9hcmRzL2Ix"
        );
    }

    #[test]
    fn session_key_embeds_raw_session_id() {
        let keys = KeySchema::new("boardwatch");
        let session = SessionId::new("sess-1");
        assert_eq!(keys.session_key(&session), "boardwatch:session:sess-1:uris");
    }

    #[test]
    fn channel_uses_dot_separator() {
        let keys = KeySchema::new("boardwatch");
        assert_eq!(keys.channel(), "boardwatch.events");
    }

    #[test]
    fn distinct_uris_never_share_a_key() {
        let keys = KeySchema::new("p");
        let a = keys.uri_key(&ResourceUri::list("l1"));
        let b = keys.uri_key(&ResourceUri::cards_in_list("l1"));
        assert_ne!(a, b);
    }
}
