//! Maps domain events to the resource URIs they invalidate.
//!
//! The mapping is table-driven: each known event type points at a list of
//! [`Target`] rules, and each rule names the URI template it produces plus
//! the payload field that fills it. Supporting a new event type is a table
//! change, not new control flow.
//!
//! Identifying fields may appear at the payload top level (`boardId`,
//! `listId`, `cardId`, `prevListId`) or nested under the mutated entity's
//! `item` object. Either location suffices. A rule whose field cannot be
//! resolved contributes nothing; an unrecognized event type or a payload
//! with no resolvable ids yields the empty set, which downstream is a
//! normal "no resource affected" outcome.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

use super::ResourceUri;

/// Where a rule finds the identifier it needs.
#[derive(Debug, Clone, Copy)]
enum Field {
    /// Top-level key, falling back to the same key on the nested `item`.
    ///
    /// Used for foreign keys: a comment's `item` carries `cardId`, a
    /// card's `item` carries `listId` and `boardId`.
    TopOrItem(&'static str),

    /// Top-level key, falling back to `item.id`.
    ///
    /// Used for the mutated entity's own id: a card event may carry
    /// `cardId` at the top level or the full card as `item`.
    OwnId(&'static str),
}

impl Field {
    fn resolve<'a>(&self, payload: &'a Value) -> Option<&'a str> {
        match self {
            Field::TopOrItem(key) => {
                top_level(payload, key).or_else(|| item_field(payload, key))
            }
            Field::OwnId(key) => top_level(payload, key).or_else(|| item_field(payload, "id")),
        }
    }
}

fn top_level<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str)
}

fn item_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get("item")
        .and_then(|item| item.get(key))
        .and_then(Value::as_str)
}

/// One URI template an event touches, plus its source field.
#[derive(Debug, Clone, Copy)]
enum Target {
    Board(Field),
    List(Field),
    CardsInList(Field),
    Card(Field),
    CardComments(Field),
    Notifications,
}

impl Target {
    fn resolve(&self, payload: &Value) -> Option<ResourceUri> {
        match self {
            Target::Board(f) => f.resolve(payload).map(ResourceUri::board),
            Target::List(f) => f.resolve(payload).map(ResourceUri::list),
            Target::CardsInList(f) => f.resolve(payload).map(ResourceUri::cards_in_list),
            Target::Card(f) => f.resolve(payload).map(ResourceUri::card),
            Target::CardComments(f) => f.resolve(payload).map(ResourceUri::card_comments),
            Target::Notifications => Some(ResourceUri::notifications()),
        }
    }
}

/// Card created: the board changed and the target list's card collection grew.
const CARD_CREATE: &[Target] = &[
    Target::Board(Field::TopOrItem("boardId")),
    Target::CardsInList(Field::TopOrItem("listId")),
];

/// Card updated or deleted: the card itself, its board, and the card
/// collections of both the current and (for moves) the previous list.
/// When the card did not move, the two list targets collapse in the set.
const CARD_MUTATE: &[Target] = &[
    Target::Card(Field::OwnId("cardId")),
    Target::Board(Field::TopOrItem("boardId")),
    Target::CardsInList(Field::TopOrItem("listId")),
    Target::CardsInList(Field::TopOrItem("prevListId")),
];

const LIST_MUTATE: &[Target] = &[
    Target::List(Field::OwnId("listId")),
    Target::CardsInList(Field::OwnId("listId")),
    Target::Board(Field::TopOrItem("boardId")),
];

/// Board mutations: the board's `item` is the board itself.
const BOARD_MUTATE: &[Target] = &[Target::Board(Field::OwnId("boardId"))];

/// Label mutations roll up to the owning board; the label's `item`
/// carries `boardId` as a foreign key.
const LABEL_MUTATE: &[Target] = &[Target::Board(Field::TopOrItem("boardId"))];

const COMMENT_MUTATE: &[Target] = &[
    Target::Card(Field::TopOrItem("cardId")),
    Target::CardComments(Field::TopOrItem("cardId")),
];

/// Checklist tasks and attachments only invalidate their parent card.
const CARD_CHILD_MUTATE: &[Target] = &[Target::Card(Field::TopOrItem("cardId"))];

const NOTIFICATION_CREATE: &[Target] = &[Target::Notifications];

static RULES: Lazy<HashMap<&'static str, &'static [Target]>> = Lazy::new(|| {
    HashMap::from([
        ("cardCreate", CARD_CREATE),
        ("cardUpdate", CARD_MUTATE),
        ("cardDelete", CARD_MUTATE),
        ("listCreate", LIST_MUTATE),
        ("listUpdate", LIST_MUTATE),
        ("listDelete", LIST_MUTATE),
        ("boardCreate", BOARD_MUTATE),
        ("boardUpdate", BOARD_MUTATE),
        ("boardDelete", BOARD_MUTATE),
        ("labelCreate", LABEL_MUTATE),
        ("labelUpdate", LABEL_MUTATE),
        ("labelDelete", LABEL_MUTATE),
        ("commentCreate", COMMENT_MUTATE),
        ("commentUpdate", COMMENT_MUTATE),
        ("commentDelete", COMMENT_MUTATE),
        ("taskCreate", CARD_CHILD_MUTATE),
        ("taskUpdate", CARD_CHILD_MUTATE),
        ("taskDelete", CARD_CHILD_MUTATE),
        ("attachmentCreate", CARD_CHILD_MUTATE),
        ("attachmentDelete", CARD_CHILD_MUTATE),
        ("notificationCreate", NOTIFICATION_CREATE),
    ])
});

/// Resolve the set of resource URIs affected by one domain event.
///
/// Pure and stateless. The returned set is deduplicated; an empty set
/// means no watchable resource was affected.
pub fn map_to_uris(event_type: &str, payload: &Value) -> BTreeSet<ResourceUri> {
    let Some(targets) = RULES.get(event_type) else {
        return BTreeSet::new();
    };

    targets
        .iter()
        .filter_map(|target| target.resolve(payload))
        .collect()
}
