//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the core to external systems:
//! - `store` - Set-store backends (Redis, in-memory)
//! - `events` - Domain-event sources (Redis pub/sub)
//! - `notify` - Notification sinks (logging, recording)

pub mod events;
pub mod notify;
pub mod store;

pub use events::{ListenerError, RedisEventListener};
pub use notify::{LoggingSink, RecordingSink};
pub use store::{InMemorySetStore, RedisSetStore};
