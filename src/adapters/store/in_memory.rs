//! In-memory set store for testing.
//!
//! Backs the subscription indexes with process-local maps plus an expiry
//! table, so registry and dispatcher behavior can be tested without a
//! running Redis.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in
//! production. It uses `.expect()` on lock operations which will panic if
//! locks are poisoned. Production code should use `RedisSetStore`.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::ports::{SetStore, StoreError};

/// Process-local set store with TTL support.
///
/// TTLs are tracked as deadlines and enforced lazily: any operation that
/// touches an expired key first drops it, matching how a real store's
/// expired keys read as absent.
pub struct InMemorySetStore {
    sets: RwLock<HashMap<String, HashSet<String>>>,
    deadlines: RwLock<HashMap<String, Instant>>,
}

impl InMemorySetStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            sets: RwLock::new(HashMap::new()),
            deadlines: RwLock::new(HashMap::new()),
        }
    }

    // === Test Helpers ===

    /// Drop a key immediately, as if its TTL had lapsed.
    ///
    /// Lets tests simulate a session going stale without waiting out a
    /// real clock.
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    pub fn force_expire(&self, key: &str) {
        self.sets
            .write()
            .expect("InMemorySetStore: sets lock poisoned")
            .remove(key);
        self.deadlines
            .write()
            .expect("InMemorySetStore: deadlines lock poisoned")
            .remove(key);
    }

    /// Number of live keys (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    pub fn key_count(&self) -> usize {
        self.purge_expired();
        self.sets
            .read()
            .expect("InMemorySetStore: sets lock poisoned")
            .len()
    }

    /// Drop every key whose deadline has passed.
    fn purge_expired(&self) {
        let now = Instant::now();
        let expired: Vec<String> = {
            let deadlines = self
                .deadlines
                .read()
                .expect("InMemorySetStore: deadlines lock poisoned");
            deadlines
                .iter()
                .filter(|(_, deadline)| **deadline <= now)
                .map(|(key, _)| key.clone())
                .collect()
        };
        if expired.is_empty() {
            return;
        }

        let mut sets = self
            .sets
            .write()
            .expect("InMemorySetStore: sets lock poisoned");
        let mut deadlines = self
            .deadlines
            .write()
            .expect("InMemorySetStore: deadlines lock poisoned");
        for key in expired {
            sets.remove(&key);
            deadlines.remove(&key);
        }
    }
}

impl Default for InMemorySetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SetStore for InMemorySetStore {
    async fn set_add(&self, key: &str, member: &str) -> Result<(), StoreError> {
        self.purge_expired();
        self.sets
            .write()
            .expect("InMemorySetStore: sets lock poisoned")
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<(), StoreError> {
        self.purge_expired();
        let mut sets = self
            .sets
            .write()
            .expect("InMemorySetStore: sets lock poisoned");
        if let Some(set) = sets.get_mut(key) {
            set.remove(member);
            if set.is_empty() {
                sets.remove(key);
                self.deadlines
                    .write()
                    .expect("InMemorySetStore: deadlines lock poisoned")
                    .remove(key);
            }
        }
        Ok(())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        self.purge_expired();
        let sets = self
            .sets
            .read()
            .expect("InMemorySetStore: sets lock poisoned");
        Ok(sets
            .get(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn set_contains(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        self.purge_expired();
        let sets = self
            .sets
            .read()
            .expect("InMemorySetStore: sets lock poisoned");
        Ok(sets.get(key).is_some_and(|set| set.contains(member)))
    }

    async fn key_exists(&self, key: &str) -> Result<bool, StoreError> {
        self.purge_expired();
        Ok(self
            .sets
            .read()
            .expect("InMemorySetStore: sets lock poisoned")
            .contains_key(key))
    }

    async fn key_expire(&self, key: &str, ttl_secs: u64) -> Result<(), StoreError> {
        self.purge_expired();
        let exists = self
            .sets
            .read()
            .expect("InMemorySetStore: sets lock poisoned")
            .contains_key(key);
        // Expiring a missing key is a no-op, as in Redis.
        if exists {
            self.deadlines
                .write()
                .expect("InMemorySetStore: deadlines lock poisoned")
                .insert(key.to_string(), Instant::now() + Duration::from_secs(ttl_secs));
        }
        Ok(())
    }

    async fn key_delete(&self, key: &str) -> Result<(), StoreError> {
        self.force_expire(key);
        Ok(())
    }
}
