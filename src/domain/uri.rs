//! Resource URIs naming watchable task-board resources.
//!
//! A [`ResourceUri`] is an opaque string key. The subscription registry
//! never parses one; URIs are produced by the event mapper and by the
//! session layer when a client starts watching a resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// URI scheme for all watchable resources.
pub const URI_SCHEME: &str = "taskboard";

/// Opaque string key identifying a watchable resource.
///
/// Known shapes (all constructed through the associated functions below):
/// - `taskboard://boards/{boardId}`
/// - `taskboard://lists/{listId}`
/// - `taskboard://lists/{listId}/cards`
/// - `taskboard://cards/{cardId}`
/// - `taskboard://cards/{cardId}/comments`
/// - `taskboard://notifications`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceUri(String);

impl ResourceUri {
    /// Wrap an already-formed URI string.
    ///
    /// No validation is performed; the registry treats URIs as opaque keys.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// URI for a board.
    pub fn board(board_id: &str) -> Self {
        Self(format!("{}://boards/{}", URI_SCHEME, board_id))
    }

    /// URI for a list.
    pub fn list(list_id: &str) -> Self {
        Self(format!("{}://lists/{}", URI_SCHEME, list_id))
    }

    /// URI for the collection of cards in a list.
    pub fn cards_in_list(list_id: &str) -> Self {
        Self(format!("{}://lists/{}/cards", URI_SCHEME, list_id))
    }

    /// URI for a card.
    pub fn card(card_id: &str) -> Self {
        Self(format!("{}://cards/{}", URI_SCHEME, card_id))
    }

    /// URI for the collection of comments on a card.
    pub fn card_comments(card_id: &str) -> Self {
        Self(format!("{}://cards/{}/comments", URI_SCHEME, card_id))
    }

    /// Global notifications URI.
    ///
    /// Per-session filtering of notification events happens upstream.
    pub fn notifications() -> Self {
        Self(format!("{}://notifications", URI_SCHEME))
    }

    /// Get the URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ResourceUri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ResourceUri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_uri_format() {
        assert_eq!(ResourceUri::board("b1").as_str(), "taskboard://boards/b1");
    }

    #[test]
    fn list_uris_are_distinct_from_card_collection() {
        assert_eq!(ResourceUri::list("l1").as_str(), "taskboard://lists/l1");
        assert_eq!(
            ResourceUri::cards_in_list("l1").as_str(),
            "taskboard://lists/l1/cards"
        );
    }

    #[test]
    fn card_and_comment_uris() {
        assert_eq!(ResourceUri::card("c1").as_str(), "taskboard://cards/c1");
        assert_eq!(
            ResourceUri::card_comments("c1").as_str(),
            "taskboard://cards/c1/comments"
        );
    }

    #[test]
    fn notifications_uri_is_global() {
        assert_eq!(
            ResourceUri::notifications().as_str(),
            "taskboard://notifications"
        );
    }

    #[test]
    fn uri_serializes_transparently() {
        let uri = ResourceUri::board("b1");
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, r#""taskboard://boards/b1""#);
    }

    #[test]
    fn uri_from_string_preserves_value() {
        let uri: ResourceUri = "custom://thing/42".into();
        assert_eq!(uri.as_str(), "custom://thing/42");
    }
}
