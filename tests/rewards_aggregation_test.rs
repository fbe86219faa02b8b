//! Aggregation end to end: mock upstream over HTTP, real rewards client.

use std::sync::Arc;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use spotlight::adapters::rewards::RewardsClient;
use spotlight::domain::models::{AggregatorConfig, UpstreamConfig};
use spotlight::services::Aggregator;

fn aggregator(server: &ServerGuard) -> Aggregator {
    let client = RewardsClient::new(&UpstreamConfig {
        base_url: server.url(),
        timeout_ms: 2_000,
    })
    .unwrap();
    Aggregator::new(
        Arc::new(client),
        AggregatorConfig {
            max_concurrency: 3,
            lookup_timeout_ms: 2_000,
            max_winners: 50,
        },
    )
}

async fn mock_user(server: &mut ServerGuard, username: &str, body: serde_json::Value) -> mockito::Mock {
    server
        .mock("GET", "/user-by-username")
        .match_query(Matcher::UrlEncoded("username".into(), username.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn test_aggregate_over_http() {
    let mut server = Server::new_async().await;

    let winners = server
        .mock("GET", "/creator-rewards-winner-history")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "result": {"history": {"winners": [
                    {"fid": 3, "username": "dwr", "rank": 1},
                    {"fid": 5650, "username": "vitalik", "rank": 2},
                    {"fid": 404, "username": "ghost", "rank": 3},
                    {"fid": 500, "username": "broken", "rank": 4}
                ]}}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let dwr = mock_user(
        &mut server,
        "dwr",
        json!({"result": {"user": {
            "fid": 3,
            "username": "dwr",
            "displayName": "Dan Romero",
            "pfp": {"url": "https://example.com/dwr.png"},
            "profile": {"bio": {"text": "Working on Farcaster"}},
            "followerCount": 125_234,
            "followingCount": 892,
            "powerBadge": true,
            "registeredAt": "2022-01-15T10:00:00Z"
        }}}),
    )
    .await;
    let vitalik = mock_user(
        &mut server,
        "vitalik",
        json!({"result": {"user": {"fid": 5650, "username": "vitalik"}}}),
    )
    .await;
    let ghost = server
        .mock("GET", "/user-by-username")
        .match_query(Matcher::UrlEncoded("username".into(), "ghost".into()))
        .with_status(404)
        .with_body("{\"errors\":[{\"message\":\"not found\"}]}")
        .create_async()
        .await;
    let broken = server
        .mock("GET", "/user-by-username")
        .match_query(Matcher::UrlEncoded("username".into(), "broken".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"result\": {}}")
        .create_async()
        .await;

    let listing = aggregator(&server).aggregate().await.unwrap();

    winners.assert_async().await;
    dwr.assert_async().await;
    vitalik.assert_async().await;
    ghost.assert_async().await;
    broken.assert_async().await;

    let names: Vec<_> = listing.users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["dwr", "vitalik"]);

    let dan = &listing.users[0];
    assert_eq!(dan.display_name, "Dan Romero");
    assert_eq!(dan.avatar, "https://example.com/dwr.png");
    assert_eq!(dan.bio, "Working on Farcaster");
    assert_eq!(dan.followers, "125.2K");
    assert_eq!(dan.following, "892");
    assert!(dan.verified);
    assert_eq!(dan.join_date, "Jan 2022");

    let v = &listing.users[1];
    assert_eq!(v.display_name, "vitalik");
    assert_eq!(v.avatar, "/placeholder.svg?height=80&width=80");
    assert!(!v.verified);

    assert_eq!(listing.omitted_count(), 2);
    assert_eq!(listing.omitted[0].key, "ghost");
    assert!(listing.omitted[0].reason.contains("404"));
    assert_eq!(listing.omitted[1].key, "broken");
    assert!(listing.omitted[1].reason.contains("parse"));
}

#[tokio::test]
async fn test_upstream_outage_fails_aggregation() {
    let mut server = Server::new_async().await;
    let winners = server
        .mock("GET", "/creator-rewards-winner-history")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let result = aggregator(&server).aggregate().await;

    winners.assert_async().await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("503"), "unexpected error: {err}");
}
