//! Time-boxed cache for the featured-user list.
//!
//! One envelope lives under a fixed key in an injected [`KeyValueStore`].
//! Reads fail open: a store error, an unparseable envelope or an expired
//! envelope all read as "no value", and the bad or expired entry is removed.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::models::{CacheConfig, CachedListEnvelope, UserSummary};
use crate::domain::ports::{Clock, KeyValueStore, StoreError};

/// Default validity window of a cached list.
pub const DEFAULT_TTL_MS: u64 = 120_000;

/// Default key the envelope is stored under.
pub const DEFAULT_CACHE_KEY: &str = "spotlight:users";

pub struct ListCache {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    key: String,
    ttl_ms: u64,
}

impl ListCache {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            key: DEFAULT_CACHE_KEY.to_string(),
            ttl_ms: DEFAULT_TTL_MS,
        }
    }

    pub fn from_config(
        config: &CacheConfig,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::new(store, clock)
            .with_key(config.key.clone())
            .with_ttl(config.ttl_ms)
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    /// Cached list if a fresh envelope exists, otherwise `None`.
    pub async fn load(&self) -> Option<Vec<UserSummary>> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "list cache miss");
                return None;
            }
            Err(e @ StoreError::Corrupt(_)) => {
                warn!(key = %self.key, error = %e, "list cache store corrupt, discarding");
                self.remove().await;
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "list cache read failed, treating as miss");
                return None;
            }
        };

        let envelope: CachedListEnvelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding malformed list cache entry");
                self.remove().await;
                return None;
            }
        };

        let now = self.clock.now_millis();
        if !envelope.is_fresh(now, self.ttl_ms) {
            debug!(
                key = %self.key,
                age_ms = envelope.age_ms(now),
                ttl_ms = self.ttl_ms,
                "list cache entry expired"
            );
            self.remove().await;
            return None;
        }

        debug!(key = %self.key, users = envelope.users.len(), "list cache hit");
        Some(envelope.users)
    }

    /// Store `users` stamped with the current time, replacing any prior entry.
    pub async fn save(&self, users: &[UserSummary]) {
        let envelope = CachedListEnvelope::new(users.to_vec(), self.clock.now_millis());
        let raw = match serde_json::to_string(&envelope) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize list cache entry");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, raw).await {
            warn!(key = %self.key, error = %e, "list cache write failed");
        }
    }

    /// Drop the stored envelope so the next `load` misses.
    pub async fn invalidate(&self) {
        debug!(key = %self.key, "invalidating list cache");
        self.remove().await;
    }

    async fn remove(&self) {
        if let Err(e) = self.store.delete(&self.key).await {
            warn!(key = %self.key, error = %e, "list cache delete failed");
        }
    }
}
