//! Session identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one live client connection.
///
/// Sessions are ephemeral: each carries a sliding liveness window in the
/// subscription store, refreshed on every successful subscribe. A session
/// whose liveness key has lapsed is treated as gone and is pruned from the
/// subscriber indexes lazily, at read time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the session ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
