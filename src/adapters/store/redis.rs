//! Redis-backed set store for production deployments.
//!
//! Every trait method maps to exactly one Redis command, so the per-key
//! atomicity the port promises is exactly the atomicity Redis gives each
//! command. No pipelining, no transactions, no retries.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::ports::{SetStore, StoreError};

/// Shared set-store over a multiplexed Redis connection.
///
/// The connection is cheap to clone; each operation clones it the way the
/// multiplexed API expects.
#[derive(Clone)]
pub struct RedisSetStore {
    conn: MultiplexedConnection,
}

impl RedisSetStore {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }
}

fn backend_err(e: redis::RedisError) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl SetStore for RedisSetStore {
    async fn set_add(&self, key: &str, member: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.sadd::<_, _, ()>(key, member)
            .await
            .map_err(backend_err)
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.srem::<_, _, ()>(key, member)
            .await
            .map_err(backend_err)
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.conn.clone();
        conn.smembers::<_, Vec<String>>(key)
            .await
            .map_err(backend_err)
    }

    async fn set_contains(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        conn.sismember::<_, _, bool>(key, member)
            .await
            .map_err(backend_err)
    }

    async fn key_exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        conn.exists::<_, bool>(key).await.map_err(backend_err)
    }

    async fn key_expire(&self, key: &str, ttl_secs: u64) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.expire::<_, ()>(key, ttl_secs as i64)
            .await
            .map_err(backend_err)
    }

    async fn key_delete(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(backend_err)
    }
}

impl std::fmt::Debug for RedisSetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSetStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    // Redis integration tests require a running Redis instance and are
    // run separately from unit tests. Registry and dispatcher behavior is
    // covered against the in-memory store.
    //
    // Example setup:
    //
    // #[tokio::test]
    // #[ignore] // Run with: cargo test -- --ignored
    // async fn test_redis_set_store() {
    //     let client = redis::Client::open("redis://127.0.0.1/").unwrap();
    //     let conn = client.get_multiplexed_tokio_connection().await.unwrap();
    //     let store = RedisSetStore::new(conn);
    //     // ... test code
    // }
}
