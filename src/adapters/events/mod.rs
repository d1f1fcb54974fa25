//! Event source adapters.
//!
//! - `RedisEventListener` - Pub/sub loop feeding the dispatcher

mod redis_listener;

pub use redis_listener::{ListenerError, RedisEventListener};
