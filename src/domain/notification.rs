//! Notification descriptors emitted by the dispatcher.

use serde::{Deserialize, Serialize};

use super::{ResourceUri, SessionId};

/// One (event, subscriber) dispatch outcome.
///
/// The dispatcher emits one descriptor per live subscriber of each affected
/// resource. Actual delivery to the session's connection is the transport's
/// concern, behind the `NotificationSink` port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Session the notification is addressed to.
    pub session_id: SessionId,

    /// Resource whose state was invalidated.
    pub uri: ResourceUri,

    /// Type tag of the originating domain event.
    pub event_type: String,

    /// Event timestamp in epoch milliseconds.
    pub timestamp: i64,
}
