//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `keys` - Store key derivation for the subscription indexes
//! - `mapper` - Pure event-type → affected-URI mapping
//! - `notification` - Notification descriptors emitted by the dispatcher
//! - `session` - Session identifiers
//! - `uri` - Resource URIs naming watchable resources

pub mod keys;
pub mod mapper;
pub mod notification;
pub mod session;
pub mod uri;

pub use keys::KeySchema;
pub use mapper::map_to_uris;
pub use notification::Notification;
pub use session::SessionId;
pub use uri::{ResourceUri, URI_SCHEME};
