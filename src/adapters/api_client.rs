//! HTTP fetchers for the Spotlight API.
//!
//! Single attempt per call. Any non-success status other than 404, any
//! network failure and any unparseable body all surface as
//! [`FetchError::FailedToLoad`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::errors::normalize_username;
use crate::domain::models::{ClientConfig, UserData, UserSummary};
use crate::domain::ports::{FetchError, UserApi};

/// Client for `GET /api/users` and `GET /api/users/{username}`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::FailedToLoad(format!("invalid base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::FailedToLoad(format!(
                "invalid base URL: {}",
                config.base_url
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| FetchError::FailedToLoad(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "fetching");

        let resp = self.http.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            FetchError::FailedToLoad(e.to_string())
        })?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound),
            status if !status.is_success() => {
                warn!(%url, %status, "unexpected status");
                Err(FetchError::FailedToLoad(format!("server returned {status}")))
            }
            _ => resp
                .json::<T>()
                .await
                .map_err(|e| FetchError::FailedToLoad(format!("invalid response body: {e}"))),
        }
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn list_users(&self) -> Result<Vec<UserSummary>, FetchError> {
        self.fetch(self.endpoint(&["api", "users"])).await
    }

    async fn get_profile(&self, username: &str) -> Result<UserData, FetchError> {
        let username = normalize_username(username)
            .map_err(|_| FetchError::InvalidUsername(username.to_string()))?;
        self.fetch(self.endpoint(&["api", "users", username])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::new(&ClientConfig {
            base_url: server.url(),
            timeout_ms: 2_000,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_encodes_username() {
        let client = ApiClient::new(&ClientConfig {
            base_url: "http://localhost:3000/".to_string(),
            timeout_ms: 1_000,
        })
        .unwrap();
        let url = client.endpoint(&["api", "users", "a b"]);
        assert_eq!(url.as_str(), "http://localhost:3000/api/users/a%20b");
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/users/ghost")
            .with_status(404)
            .with_body(r#"{"error":"User not found"}"#)
            .create_async()
            .await;

        let err = client_for(&server).get_profile("ghost").await.unwrap_err();
        assert_eq!(err, FetchError::NotFound);
    }

    #[tokio::test]
    async fn test_server_error_is_failed_to_load() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/users")
            .with_status(500)
            .create_async()
            .await;

        let err = client_for(&server).list_users().await.unwrap_err();
        assert!(matches!(err, FetchError::FailedToLoad(_)));
    }

    #[tokio::test]
    async fn test_blank_username_skips_request() {
        let server = Server::new_async().await;
        let err = client_for(&server).get_profile("  ").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUsername(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_failed_to_load() {
        let client = ApiClient::new(&ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_ms: 500,
        })
        .unwrap();
        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, FetchError::FailedToLoad(_)));
    }
}
