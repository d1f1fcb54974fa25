//! Integration tests for the subscribe → event → notification flow.
//!
//! These tests verify the end-to-end path:
//! 1. Sessions subscribe to resource URIs through the registry
//! 2. A raw channel message reaches the dispatcher
//! 3. Affected URIs are resolved (mapper or embedded list)
//! 4. Only live subscribers of those URIs receive descriptors
//!
//! Uses the in-memory adapters to test the flow without external
//! dependencies.

use serde_json::json;
use std::sync::Arc;

use boardwatch::adapters::{InMemorySetStore, RecordingSink};
use boardwatch::application::{EventDispatcher, SubscriptionRegistry};
use boardwatch::domain::{KeySchema, ResourceUri, SessionId};

struct Harness {
    store: Arc<InMemorySetStore>,
    registry: Arc<SubscriptionRegistry>,
    sink: Arc<RecordingSink>,
    dispatcher: EventDispatcher,
}

fn harness() -> Harness {
    let store = Arc::new(InMemorySetStore::new());
    let registry = Arc::new(SubscriptionRegistry::new(
        store.clone(),
        KeySchema::new("boardwatch"),
    ));
    let sink = Arc::new(RecordingSink::new());
    let dispatcher = EventDispatcher::new(registry.clone(), sink.clone());
    Harness {
        store,
        registry,
        sink,
        dispatcher,
    }
}

#[tokio::test]
async fn card_move_notifies_watchers_of_both_lists() {
    let h = harness();
    let source_watcher = SessionId::new("watching-source");
    let dest_watcher = SessionId::new("watching-dest");
    let board_watcher = SessionId::new("watching-board");

    h.registry
        .subscribe(&source_watcher, &ResourceUri::cards_in_list("l1"))
        .await
        .unwrap();
    h.registry
        .subscribe(&dest_watcher, &ResourceUri::cards_in_list("l2"))
        .await
        .unwrap();
    h.registry
        .subscribe(&board_watcher, &ResourceUri::board("b1"))
        .await
        .unwrap();

    let raw = json!({
        "type": "cardUpdate",
        "boardId": "b1",
        "listId": "l2",
        "prevListId": "l1",
        "item": {"id": "c1"},
        "timestamp": 1_700_000_000_000_i64
    })
    .to_string();
    h.dispatcher.handle_event(&raw).await;

    assert_eq!(h.sink.delivered_to(&source_watcher).len(), 1);
    assert_eq!(h.sink.delivered_to(&dest_watcher).len(), 1);
    assert_eq!(h.sink.delivered_to(&board_watcher).len(), 1);

    let to_source = h.sink.delivered_to(&source_watcher);
    assert_eq!(to_source[0].uri, ResourceUri::cards_in_list("l1"));
    assert_eq!(to_source[0].event_type, "cardUpdate");
    assert_eq!(to_source[0].timestamp, 1_700_000_000_000);
}

#[tokio::test]
async fn unrelated_watchers_stay_silent() {
    let h = harness();
    let other = SessionId::new("watching-other-board");

    h.registry
        .subscribe(&other, &ResourceUri::board("b2"))
        .await
        .unwrap();

    let raw = json!({"type": "boardUpdate", "boardId": "b1", "timestamp": 1}).to_string();
    h.dispatcher.handle_event(&raw).await;

    assert!(h.sink.delivered().is_empty());
}

#[tokio::test]
async fn pre_resolved_uris_skip_the_mapper() {
    let h = harness();
    let session = SessionId::new("sess-1");
    let uri = ResourceUri::new("taskboard://boards/b9");

    h.registry.subscribe(&session, &uri).await.unwrap();

    // No id fields at all: the embedded list alone drives dispatch.
    let raw = json!({
        "type": "boardUpdate",
        "uris": ["taskboard://boards/b9"],
        "timestamp": 5
    })
    .to_string();
    h.dispatcher.handle_event(&raw).await;

    let delivered = h.sink.delivered_to(&session);
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].uri, uri);
}

#[tokio::test]
async fn stale_session_gets_no_notification_and_is_pruned() {
    let h = harness();
    let live = SessionId::new("live");
    let stale = SessionId::new("stale");
    let uri = ResourceUri::board("b1");
    let keys = KeySchema::new("boardwatch");

    h.registry.subscribe(&live, &uri).await.unwrap();
    h.registry.subscribe(&stale, &uri).await.unwrap();
    h.store.force_expire(&keys.session_key(&stale));

    let raw = json!({"type": "boardUpdate", "boardId": "b1", "timestamp": 2}).to_string();
    h.dispatcher.handle_event(&raw).await;

    assert_eq!(h.sink.delivered_to(&live).len(), 1);
    assert!(h.sink.delivered_to(&stale).is_empty());

    // The dispatch read healed the index.
    assert!(!h.registry.is_subscribed(&stale, &uri).await.unwrap());
}

#[tokio::test]
async fn disconnected_session_stops_receiving() {
    let h = harness();
    let session = SessionId::new("sess-1");

    for uri in [
        ResourceUri::board("b1"),
        ResourceUri::card("c1"),
        ResourceUri::card_comments("c1"),
    ] {
        h.registry.subscribe(&session, &uri).await.unwrap();
    }
    h.registry.remove_session(&session).await.unwrap();

    let raw = json!({
        "type": "commentCreate",
        "item": {"id": "com1", "cardId": "c1"},
        "timestamp": 3
    })
    .to_string();
    h.dispatcher.handle_event(&raw).await;

    assert!(h.sink.delivered().is_empty());
}

#[tokio::test]
async fn listener_order_is_preserved_per_message() {
    let h = harness();
    let session = SessionId::new("sess-1");
    h.registry
        .subscribe(&session, &ResourceUri::board("b1"))
        .await
        .unwrap();

    for ts in [10_i64, 20, 30] {
        let raw = json!({"type": "boardUpdate", "boardId": "b1", "timestamp": ts}).to_string();
        h.dispatcher.handle_event(&raw).await;
    }

    let delivered = h.sink.delivered_to(&session);
    let timestamps: Vec<i64> = delivered.iter().map(|n| n.timestamp).collect();
    assert_eq!(timestamps, vec![10, 20, 30]);
}

#[tokio::test]
async fn malformed_message_then_well_formed_message_both_survive() {
    let h = harness();
    let session = SessionId::new("sess-1");
    h.registry
        .subscribe(&session, &ResourceUri::board("b1"))
        .await
        .unwrap();

    h.dispatcher.handle_event("{{{ definitely not json").await;
    let raw = json!({"type": "boardUpdate", "boardId": "b1", "timestamp": 4}).to_string();
    h.dispatcher.handle_event(&raw).await;

    assert_eq!(h.sink.delivered_to(&session).len(), 1);
}

#[tokio::test]
async fn notification_event_reaches_global_watchers() {
    let h = harness();
    let session = SessionId::new("sess-1");
    h.registry
        .subscribe(&session, &ResourceUri::notifications())
        .await
        .unwrap();

    let raw = json!({"type": "notificationCreate", "item": {"id": "n1"}, "timestamp": 6}).to_string();
    h.dispatcher.handle_event(&raw).await;

    let delivered = h.sink.delivered_to(&session);
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].uri, ResourceUri::notifications());
}
