use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// Cached user list plus the epoch-millisecond time it was captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedListEnvelope {
    pub users: Vec<UserSummary>,
    pub timestamp: i64,
}

impl CachedListEnvelope {
    pub fn new(users: Vec<UserSummary>, timestamp: i64) -> Self {
        Self { users, timestamp }
    }

    /// Milliseconds since capture. A timestamp in the future counts as zero.
    pub fn age_ms(&self, now: i64) -> u64 {
        u64::try_from(now.saturating_sub(self.timestamp)).unwrap_or(0)
    }

    /// Valid while `now - timestamp <= ttl_ms`.
    pub fn is_fresh(&self, now: i64, ttl_ms: u64) -> bool {
        self.age_ms(now) <= ttl_ms
    }
}
