use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{UserData, UserListing};

/// Source of the featured-user list served by `/api/users`.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self) -> DomainResult<UserListing>;
}

/// Source of full profile records served by `/api/users/{username}`.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Returns `DomainError::UserNotFound` for unknown usernames
    async fn get_profile(&self, username: &str) -> DomainResult<UserData>;
}
