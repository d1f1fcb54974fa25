//! Subscription registry - many-to-many index of sessions and URIs.
//!
//! Each subscription is stored redundantly in two reciprocal sets:
//!
//! ```text
//! by-URI index:      {prefix}:subscriptions:{base64(uri)} → {session ids}
//! by-session index:  {prefix}:session:{id}:uris           → {uris}  (TTL)
//! ```
//!
//! The by-session key carries the session's liveness TTL, refreshed on
//! every subscribe. A session that disappears without unsubscribing simply
//! lets that key lapse; `get_subscribers` detects the missing liveness key
//! at read time and prunes the stale entry from the by-URI set.
//!
//! `subscribe` issues two single-key writes with no transaction around
//! them. A crash between the writes leaves the pair in only one index;
//! the gap is accepted and repaired lazily by the read-time pruning rather
//! than hidden behind a multi-key transaction the store may not offer.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{KeySchema, ResourceUri, SessionId};
use crate::ports::{SetStore, StoreError};

/// Sliding liveness window applied to the by-session key.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Many-to-many subscription index over an injected [`SetStore`].
///
/// All operations are thin compositions of single-key store primitives;
/// store errors propagate to the caller unmodified and nothing is retried
/// here. Retry policy, if any, belongs to the caller.
pub struct SubscriptionRegistry {
    store: Arc<dyn SetStore>,
    keys: KeySchema,
    session_ttl: Duration,
}

impl SubscriptionRegistry {
    /// Create a registry with the default 24h session TTL.
    pub fn new(store: Arc<dyn SetStore>, keys: KeySchema) -> Self {
        Self::with_session_ttl(store, keys, DEFAULT_SESSION_TTL)
    }

    /// Create a registry with a custom session TTL.
    pub fn with_session_ttl(
        store: Arc<dyn SetStore>,
        keys: KeySchema,
        session_ttl: Duration,
    ) -> Self {
        Self {
            store,
            keys,
            session_ttl,
        }
    }

    /// Subscribe `session` to `uri`.
    ///
    /// Idempotent: re-subscribing an existing pair only refreshes the
    /// session's liveness TTL.
    pub async fn subscribe(
        &self,
        session: &SessionId,
        uri: &ResourceUri,
    ) -> Result<(), StoreError> {
        let uri_key = self.keys.uri_key(uri);
        let session_key = self.keys.session_key(session);

        self.store.set_add(&uri_key, session.as_str()).await?;
        self.store.set_add(&session_key, uri.as_str()).await?;
        self.store
            .key_expire(&session_key, self.session_ttl.as_secs())
            .await?;

        tracing::debug!(session_id = %session, uri = %uri, "subscribed");
        Ok(())
    }

    /// Remove the (session, uri) pair from both indexes; no-op if absent.
    pub async fn unsubscribe(
        &self,
        session: &SessionId,
        uri: &ResourceUri,
    ) -> Result<(), StoreError> {
        self.store
            .set_remove(&self.keys.uri_key(uri), session.as_str())
            .await?;
        self.store
            .set_remove(&self.keys.session_key(session), uri.as_str())
            .await?;

        tracing::debug!(session_id = %session, uri = %uri, "unsubscribed");
        Ok(())
    }

    /// Tear down every subscription held by `session`.
    ///
    /// Called on disconnect or explicit logout.
    pub async fn remove_session(&self, session: &SessionId) -> Result<(), StoreError> {
        let session_key = self.keys.session_key(session);
        let uris = self.store.set_members(&session_key).await?;

        for uri in &uris {
            let uri_key = self.keys.uri_key(&ResourceUri::from(uri.as_str()));
            self.store.set_remove(&uri_key, session.as_str()).await?;
        }
        self.store.key_delete(&session_key).await?;

        tracing::debug!(session_id = %session, watched = uris.len(), "session removed");
        Ok(())
    }

    /// Live subscribers of `uri`.
    ///
    /// Candidates whose liveness key has lapsed are pruned from the by-URI
    /// set on this read and excluded from the result.
    pub async fn get_subscribers(&self, uri: &ResourceUri) -> Result<Vec<SessionId>, StoreError> {
        let uri_key = self.keys.uri_key(uri);
        let candidates = self.store.set_members(&uri_key).await?;

        let mut live = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let session = SessionId::from(candidate);
            if self
                .store
                .key_exists(&self.keys.session_key(&session))
                .await?
            {
                live.push(session);
            } else {
                // Stale entry: session's liveness key lapsed without an
                // explicit unsubscribe. Repair the index on this read.
                self.store.set_remove(&uri_key, session.as_str()).await?;
                tracing::debug!(session_id = %session, uri = %uri, "pruned stale subscriber");
            }
        }
        Ok(live)
    }

    /// The full watch set of `session` (diagnostics, unsubscribe-all).
    pub async fn get_session_uris(
        &self,
        session: &SessionId,
    ) -> Result<Vec<ResourceUri>, StoreError> {
        let uris = self
            .store
            .set_members(&self.keys.session_key(session))
            .await?;
        Ok(uris.into_iter().map(ResourceUri::from).collect())
    }

    /// O(1) membership check on the by-URI index.
    pub async fn is_subscribed(
        &self,
        session: &SessionId,
        uri: &ResourceUri,
    ) -> Result<bool, StoreError> {
        self.store
            .set_contains(&self.keys.uri_key(uri), session.as_str())
            .await
    }
}
