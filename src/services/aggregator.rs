//! Rewards aggregator: winners list → per-winner profile lookups → user list.
//!
//! Lookups run on spawned tasks bounded by a semaphore, each under its own
//! deadline. A failed lookup becomes an [`OmittedLookup`] in the listing
//! instead of vanishing; only a failed winners call fails the whole request.
//! Results keep the winners' order regardless of completion order.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    format_count, AggregatorConfig, LookupOutcome, OmittedLookup, ProfileRecord, UserListing,
    UserSummary, Winner, PLACEHOLDER_AVATAR,
};
use crate::domain::ports::{RewardsApi, UpstreamError, UserDirectory};

pub struct Aggregator {
    api: Arc<dyn RewardsApi>,
    config: AggregatorConfig,
}

impl Aggregator {
    pub fn new(api: Arc<dyn RewardsApi>, config: AggregatorConfig) -> Self {
        Self { api, config }
    }

    /// Build the user list from the current winners.
    pub async fn aggregate(&self) -> DomainResult<UserListing> {
        let winners = self
            .api
            .winner_history()
            .await
            .map_err(|e| DomainError::UpstreamFailed(e.to_string()))?;

        let total = winners.len();
        let winners = select_winners(winners, self.config.max_winners);
        info!(
            winners = total,
            selected = winners.len(),
            max_concurrency = self.config.max_concurrency,
            "aggregating winner profiles"
        );

        let outcomes = self.lookup_all(winners).await?;
        let listing = UserListing::from_outcomes(outcomes);

        for omitted in &listing.omitted {
            warn!(key = %omitted.key, reason = %omitted.reason, "winner omitted from listing");
        }
        info!(
            requested = listing.requested,
            resolved = listing.users.len(),
            omitted = listing.omitted_count(),
            "aggregation finished"
        );

        Ok(listing)
    }

    async fn lookup_all(&self, winners: Vec<Winner>) -> DomainResult<Vec<LookupOutcome>> {
        let permits = self.config.max_concurrency.clamp(1, Semaphore::MAX_PERMITS);
        let semaphore = Arc::new(Semaphore::new(permits));
        let timeout = Duration::from_millis(self.config.lookup_timeout_ms);
        let mut slots: Vec<Option<LookupOutcome>> = Vec::with_capacity(winners.len());
        let mut handles = Vec::new();

        for (index, winner) in winners.into_iter().enumerate() {
            let Some(username) = winner.username.clone() else {
                slots.push(Some(LookupOutcome::Omitted(OmittedLookup {
                    key: format!("fid:{}", winner.fid),
                    reason: "winner has no username".to_string(),
                })));
                continue;
            };
            slots.push(None);

            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|_| DomainError::UpstreamFailed("lookup pool closed".to_string()))?;
            let api = self.api.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                lookup(api.as_ref(), &username, timeout).await
            });
            handles.push((index, winner, handle));
        }

        for (index, winner, handle) in handles {
            let outcome = handle.await.unwrap_or_else(|e| {
                LookupOutcome::Omitted(OmittedLookup {
                    key: winner.username.unwrap_or_else(|| format!("fid:{}", winner.fid)),
                    reason: format!("lookup task failed: {e}"),
                })
            });
            slots[index] = Some(outcome);
        }

        Ok(slots.into_iter().flatten().collect())
    }
}

#[async_trait]
impl UserDirectory for Aggregator {
    async fn list_users(&self) -> DomainResult<UserListing> {
        self.aggregate().await
    }
}

/// Cap the winners list and drop repeated usernames, keeping rank order.
fn select_winners(winners: Vec<Winner>, max_winners: usize) -> Vec<Winner> {
    let mut seen = HashSet::new();
    winners
        .into_iter()
        .filter(|w| match &w.username {
            Some(name) => seen.insert(name.to_lowercase()),
            None => true,
        })
        .take(max_winners)
        .collect()
}

async fn lookup(api: &dyn RewardsApi, username: &str, timeout: Duration) -> LookupOutcome {
    let result = match tokio::time::timeout(timeout, api.user_by_username(username)).await {
        Ok(result) => result,
        Err(_) => Err(UpstreamError::Timeout(timeout)),
    };

    match result {
        Ok(record) => {
            debug!(%username, "winner profile resolved");
            LookupOutcome::Resolved(to_summary(record))
        }
        Err(e) => LookupOutcome::Omitted(OmittedLookup {
            key: username.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Reshape an upstream profile record into the display model.
pub fn to_summary(record: ProfileRecord) -> UserSummary {
    let display_name = record
        .display_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| record.username.clone());
    let avatar = record
        .pfp
        .map(|p| p.url)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string());
    let bio = record
        .profile
        .and_then(|p| p.bio)
        .map(|b| b.text)
        .unwrap_or_default();
    let join_date = record
        .registered_at
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.format("%b %Y").to_string())
        .unwrap_or_default();

    UserSummary {
        username: record.username,
        display_name,
        avatar,
        bio,
        followers: format_count(record.follower_count),
        following: format_count(record.following_count),
        verified: record.power_badge,
        join_date,
    }
}
