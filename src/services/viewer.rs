//! Viewer-side glue: cached list loading, profile loading and the
//! session's collected casts.
//!
//! Every fetch failure ends here as a fallback the CLI can render (an empty
//! list or an error message); nothing propagates further.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::list_cache::ListCache;
use crate::domain::models::{CollectedSet, UserData, UserSummary};
use crate::domain::ports::{FetchError, UserApi};

/// Message shown when the profile endpoint answers 404.
pub const USER_NOT_FOUND: &str = "User not found";

/// Message shown for every other profile load failure.
pub const FAILED_TO_LOAD: &str = "Failed to load user data";

/// Result of loading the featured-user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersView {
    pub users: Vec<UserSummary>,
    pub from_cache: bool,
    /// Set when the fetch failed and `users` is the empty fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of loading one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileView {
    Loaded(UserData),
    Error(String),
}

impl ProfileView {
    pub fn from_fetch(result: Result<UserData, FetchError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(FetchError::NotFound) => Self::Error(USER_NOT_FOUND.to_string()),
            Err(FetchError::InvalidUsername(_)) => Self::Error(USER_NOT_FOUND.to_string()),
            Err(FetchError::FailedToLoad(_)) => Self::Error(FAILED_TO_LOAD.to_string()),
        }
    }
}

pub struct ViewerService {
    api: Arc<dyn UserApi>,
    cache: ListCache,
    collected: CollectedSet,
}

impl ViewerService {
    pub fn new(api: Arc<dyn UserApi>, cache: ListCache) -> Self {
        Self {
            api,
            cache,
            collected: CollectedSet::new(),
        }
    }

    /// Featured users, served from the cache while it is fresh.
    pub async fn load_users(&self) -> UsersView {
        if let Some(users) = self.cache.load().await {
            return UsersView {
                users,
                from_cache: true,
                error: None,
            };
        }

        match self.api.list_users().await {
            Ok(users) => {
                info!(count = users.len(), "fetched featured users");
                self.cache.save(&users).await;
                UsersView {
                    users,
                    from_cache: false,
                    error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "error fetching users");
                UsersView {
                    users: Vec::new(),
                    from_cache: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Drop the cached list and fetch it again.
    pub async fn refresh_users(&self) -> UsersView {
        self.cache.invalidate().await;
        self.load_users().await
    }

    pub async fn clear_cache(&self) {
        self.cache.invalidate().await;
    }

    pub async fn load_profile(&self, username: &str) -> ProfileView {
        let result = self.api.get_profile(username).await;
        if let Err(e) = &result {
            warn!(%username, error = %e, "failed to load profile");
        }
        ProfileView::from_fetch(result)
    }

    /// Toggle a cast in the session's collected set.
    pub fn toggle_collect(&mut self, cast_id: u64) -> bool {
        self.collected.toggle(cast_id)
    }

    pub fn is_collected(&self, cast_id: u64) -> bool {
        self.collected.contains(cast_id)
    }

    pub const fn collected(&self) -> &CollectedSet {
        &self.collected
    }
}
