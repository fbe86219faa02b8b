use async_trait::async_trait;

use super::errors::UpstreamError;
use crate::domain::models::{ProfileRecord, Winner};

/// External creator-rewards and profile lookup API.
#[async_trait]
pub trait RewardsApi: Send + Sync {
    /// Current creator rewards winners, in rank order
    async fn winner_history(&self) -> Result<Vec<Winner>, UpstreamError>;

    /// Profile record for one username
    async fn user_by_username(&self, username: &str) -> Result<ProfileRecord, UpstreamError>;
}
