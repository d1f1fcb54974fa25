//! Set-store adapters.
//!
//! - `redis` - Production store over a multiplexed Redis connection
//! - `in_memory` - Process-local store for tests

pub mod in_memory;
pub mod redis;

pub use in_memory::InMemorySetStore;
pub use redis::RedisSetStore;
