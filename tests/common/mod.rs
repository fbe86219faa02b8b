//! Common test utilities for integration tests
//!
//! Fakes for the outbound ports plus fixture builders shared across the
//! integration test files.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use spotlight::domain::models::{ProfileRecord, UserData, UserSummary, Winner, PLACEHOLDER_AVATAR};
use spotlight::domain::ports::{FetchError, RewardsApi, UpstreamError, UserApi};

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn summary(username: &str) -> UserSummary {
    UserSummary {
        username: username.to_string(),
        display_name: format!("{username} display"),
        avatar: PLACEHOLDER_AVATAR.to_string(),
        bio: format!("bio of {username}"),
        followers: "1.2K".to_string(),
        following: "34".to_string(),
        verified: false,
        join_date: "Jan 2023".to_string(),
    }
}

pub fn winner(fid: u64, username: Option<&str>, rank: u32) -> Winner {
    Winner {
        fid,
        username: username.map(str::to_string),
        rank,
        score: 0.0,
        reward_cents: 0,
    }
}

pub fn record(fid: u64, username: &str) -> ProfileRecord {
    ProfileRecord {
        fid,
        username: username.to_string(),
        display_name: Some(format!("{username} display")),
        pfp: None,
        profile: None,
        follower_count: 1_234,
        following_count: 56,
        power_badge: false,
        registered_at: None,
    }
}

/// Scripted rewards API.
///
/// Usernames without a record answer with a 404 status error; usernames in
/// `delays` sleep that long before answering.
#[derive(Default)]
pub struct FakeRewardsApi {
    pub winners: Option<Vec<Winner>>,
    pub records: HashMap<String, ProfileRecord>,
    pub delays: HashMap<String, Duration>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub lookups: AtomicUsize,
}

impl FakeRewardsApi {
    pub fn with_winners(winners: Vec<Winner>) -> Self {
        Self {
            winners: Some(winners),
            ..Self::default()
        }
    }

    pub fn record(mut self, record: ProfileRecord) -> Self {
        self.records.insert(record.username.clone(), record);
        self
    }

    pub fn delay(mut self, username: &str, delay: Duration) -> Self {
        self.delays.insert(username.to_string(), delay);
        self
    }

    pub fn peak_concurrency(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RewardsApi for FakeRewardsApi {
    async fn winner_history(&self) -> Result<Vec<Winner>, UpstreamError> {
        self.winners.clone().ok_or_else(|| UpstreamError::Status {
            endpoint: "creator-rewards-winner-history".to_string(),
            status: 503,
            body: "unavailable".to_string(),
        })
    }

    async fn user_by_username(&self, username: &str) -> Result<ProfileRecord, UpstreamError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self
            .delays
            .get(username)
            .copied()
            .unwrap_or(Duration::from_millis(5));
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.records
            .get(username)
            .cloned()
            .ok_or_else(|| UpstreamError::Status {
                endpoint: "user-by-username".to_string(),
                status: 404,
                body: "not found".to_string(),
            })
    }
}

/// Scripted viewer-side API that counts list calls.
pub struct FakeUserApi {
    list: Mutex<Result<Vec<UserSummary>, FetchError>>,
    profiles: HashMap<String, Result<UserData, FetchError>>,
    list_calls: AtomicUsize,
}

impl FakeUserApi {
    pub fn new(list: Result<Vec<UserSummary>, FetchError>) -> Self {
        Self {
            list: Mutex::new(list),
            profiles: HashMap::new(),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn profile(mut self, username: &str, result: Result<UserData, FetchError>) -> Self {
        self.profiles.insert(username.to_string(), result);
        self
    }

    pub fn set_list(&self, list: Result<Vec<UserSummary>, FetchError>) {
        *self.list.lock().unwrap() = list;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserApi for FakeUserApi {
    async fn list_users(&self) -> Result<Vec<UserSummary>, FetchError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list.lock().unwrap().clone()
    }

    async fn get_profile(&self, username: &str) -> Result<UserData, FetchError> {
        self.profiles
            .get(username)
            .cloned()
            .unwrap_or(Err(FetchError::NotFound))
    }
}
