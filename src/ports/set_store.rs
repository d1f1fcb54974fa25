//! SetStore port - Interface to the shared subscription store.
//!
//! The subscription indexes are global mutable state shared between
//! processes. This port narrows that state to exactly the primitives the
//! registry needs, so the registry logic is identical whether it is backed
//! by Redis in production or an in-process map in unit tests.

use async_trait::async_trait;

/// Errors surfaced by the shared store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Underlying store communication or command failure.
    #[error("store error: {0}")]
    Backend(String),
}

/// Port over the shared set-store.
///
/// Each operation is atomic for its single key; nothing here spans keys.
/// Callers that need multi-key consistency must either tolerate partial
/// writes or repair lazily at read time — the registry does the latter.
///
/// Implementations must not retry internally; retry policy belongs to the
/// caller.
#[async_trait]
pub trait SetStore: Send + Sync {
    /// Add `member` to the set at `key`, creating the set if absent.
    async fn set_add(&self, key: &str, member: &str) -> Result<(), StoreError>;

    /// Remove `member` from the set at `key`; no-op if absent.
    async fn set_remove(&self, key: &str, member: &str) -> Result<(), StoreError>;

    /// All members of the set at `key`; empty for a missing key.
    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// O(1) membership check on the set at `key`.
    async fn set_contains(&self, key: &str, member: &str) -> Result<bool, StoreError>;

    /// Whether `key` exists at all (used as the liveness probe).
    async fn key_exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Set or refresh the TTL on `key`.
    async fn key_expire(&self, key: &str, ttl_secs: u64) -> Result<(), StoreError>;

    /// Delete `key` and its contents; no-op if absent.
    async fn key_delete(&self, key: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SetStore) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn set_store_is_send_sync() {
        fn check<T: SetStore>() {
            assert_send_sync::<T>();
        }
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::Backend("connection refused".to_string());
        assert_eq!(format!("{}", err), "store error: connection refused");
    }
}
