use async_trait::async_trait;

use super::errors::FetchError;
use crate::domain::models::{UserData, UserSummary};

/// Viewer-side access to the Spotlight API.
///
/// One attempt per call; no retries.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserSummary>, FetchError>;

    async fn get_profile(&self, username: &str) -> Result<UserData, FetchError>;
}
