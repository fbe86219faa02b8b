//! Aggregator fan-out behavior against a scripted rewards API.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{record, winner, FakeRewardsApi};
use spotlight::domain::models::{AggregatorConfig, ProfileRecord};
use spotlight::domain::DomainError;
use spotlight::services::Aggregator;

fn config(max_concurrency: usize) -> AggregatorConfig {
    AggregatorConfig {
        max_concurrency,
        lookup_timeout_ms: 2_000,
        max_winners: 50,
    }
}

#[tokio::test]
async fn test_results_keep_rank_order_despite_completion_order() {
    common::setup_test_logging();
    let api = FakeRewardsApi::with_winners(vec![
        winner(1, Some("slow"), 1),
        winner(2, Some("medium"), 2),
        winner(3, Some("fast"), 3),
    ])
    .record(record(1, "slow"))
    .record(record(2, "medium"))
    .record(record(3, "fast"))
    .delay("slow", Duration::from_millis(120))
    .delay("medium", Duration::from_millis(60))
    .delay("fast", Duration::from_millis(1));

    let listing = Aggregator::new(Arc::new(api), config(8))
        .aggregate()
        .await
        .unwrap();

    let names: Vec<_> = listing.users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["slow", "medium", "fast"]);
    assert!(listing.is_complete());
    assert_eq!(listing.requested, 3);
}

#[tokio::test]
async fn test_failed_lookups_are_reported_not_dropped() {
    let api = FakeRewardsApi::with_winners(vec![
        winner(1, Some("alice"), 1),
        winner(2, Some("ghost"), 2),
        winner(99, None, 3),
    ])
    .record(record(1, "alice"));

    let listing = Aggregator::new(Arc::new(api), config(8))
        .aggregate()
        .await
        .unwrap();

    assert_eq!(listing.users.len(), 1);
    assert_eq!(listing.omitted_count(), 2);
    assert_eq!(listing.requested, 3);

    assert_eq!(listing.omitted[0].key, "ghost");
    assert!(listing.omitted[0].reason.contains("404"));
    assert_eq!(listing.omitted[1].key, "fid:99");
    assert_eq!(listing.omitted[1].reason, "winner has no username");
}

#[tokio::test]
async fn test_fan_out_respects_concurrency_limit() {
    let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let mut api = FakeRewardsApi::with_winners(
        names
            .iter()
            .enumerate()
            .map(|(i, n)| winner(i as u64, Some(n), i as u32 + 1))
            .collect(),
    );
    for (i, n) in names.iter().enumerate() {
        api = api
            .record(record(i as u64, n))
            .delay(n, Duration::from_millis(30));
    }
    let api = Arc::new(api);

    let listing = Aggregator::new(api.clone(), config(2))
        .aggregate()
        .await
        .unwrap();

    assert_eq!(listing.users.len(), names.len());
    assert_eq!(api.lookup_count(), names.len());
    assert!(api.peak_concurrency() <= 2, "peak was {}", api.peak_concurrency());
}

#[tokio::test]
async fn test_slow_lookup_times_out_into_omission() {
    let api = FakeRewardsApi::with_winners(vec![
        winner(1, Some("stuck"), 1),
        winner(2, Some("quick"), 2),
    ])
    .record(record(1, "stuck"))
    .record(record(2, "quick"))
    .delay("stuck", Duration::from_secs(5));

    let aggregator = Aggregator::new(
        Arc::new(api),
        AggregatorConfig {
            max_concurrency: 4,
            lookup_timeout_ms: 50,
            max_winners: 50,
        },
    );
    let listing = aggregator.aggregate().await.unwrap();

    assert_eq!(listing.users.len(), 1);
    assert_eq!(listing.users[0].username, "quick");
    assert_eq!(listing.omitted[0].key, "stuck");
    assert!(listing.omitted[0].reason.contains("timed out"));
}

#[tokio::test]
async fn test_winners_failure_fails_whole_request() {
    let result = Aggregator::new(Arc::new(FakeRewardsApi::default()), config(8))
        .aggregate()
        .await;

    assert!(matches!(result, Err(DomainError::UpstreamFailed(msg)) if msg.contains("503")));
}

#[tokio::test]
async fn test_duplicate_usernames_and_cap() {
    let api = FakeRewardsApi::with_winners(vec![
        winner(1, Some("alice"), 1),
        winner(1, Some("Alice"), 2),
        winner(2, Some("bob"), 3),
        winner(3, Some("carol"), 4),
    ])
    .record(record(1, "alice"))
    .record(record(2, "bob"))
    .record(record(3, "carol"));
    let api = Arc::new(api);

    let listing = Aggregator::new(
        api.clone(),
        AggregatorConfig {
            max_concurrency: 4,
            lookup_timeout_ms: 1_000,
            max_winners: 2,
        },
    )
    .aggregate()
    .await
    .unwrap();

    let names: Vec<_> = listing.users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob"]);
    assert_eq!(api.lookup_count(), 2);
}

#[tokio::test]
async fn test_oversized_concurrency_is_clamped() {
    let api = FakeRewardsApi::with_winners(vec![winner(1, Some("alice"), 1), winner(2, Some("bob"), 2)])
        .record(record(1, "alice"))
        .record(record(2, "bob"));

    let listing = Aggregator::new(Arc::new(api), config(usize::MAX))
        .aggregate()
        .await
        .unwrap();

    assert_eq!(listing.users.len(), 2);
    assert!(listing.is_complete());
}

#[tokio::test]
async fn test_zero_concurrency_still_makes_progress() {
    let api = Arc::new(
        FakeRewardsApi::with_winners(vec![winner(1, Some("alice"), 1), winner(2, Some("bob"), 2)])
            .record(record(1, "alice"))
            .record(record(2, "bob")),
    );

    let listing = Aggregator::new(api.clone(), config(0))
        .aggregate()
        .await
        .unwrap();

    assert_eq!(listing.users.len(), 2);
    assert_eq!(api.peak_concurrency(), 1);
}

#[tokio::test]
async fn test_empty_winners_is_empty_listing() {
    let listing = Aggregator::new(Arc::new(FakeRewardsApi::with_winners(vec![])), config(8))
        .aggregate()
        .await
        .unwrap();

    assert!(listing.users.is_empty());
    assert!(listing.is_complete());
    assert_eq!(listing.requested, 0);
}

#[tokio::test]
async fn test_reshaped_fields_fall_back() {
    let bare = ProfileRecord {
        display_name: None,
        ..record(7, "bare")
    };
    let api = FakeRewardsApi::with_winners(vec![winner(7, Some("bare"), 1)]).record(bare);

    let listing = Aggregator::new(Arc::new(api), config(8))
        .aggregate()
        .await
        .unwrap();

    let user = &listing.users[0];
    assert_eq!(user.display_name, "bare");
    assert_eq!(user.avatar, spotlight::domain::models::PLACEHOLDER_AVATAR);
    assert_eq!(user.bio, "");
    assert_eq!(user.join_date, "");
    assert_eq!(user.following, "56");
}
