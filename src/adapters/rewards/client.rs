//! HTTP client for the creator rewards and profile lookup endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{UserByUsernameResponse, WinnerHistoryResponse};
use crate::domain::models::{ProfileRecord, UpstreamConfig, Winner};
use crate::domain::ports::{RewardsApi, UpstreamError};

const WINNER_HISTORY: &str = "creator-rewards-winner-history";
const USER_BY_USERNAME: &str = "user-by-username";

/// Client for the external rewards API.
///
/// No auth token and no retries: each call is a single GET.
#[derive(Debug, Clone)]
pub struct RewardsClient {
    http: Client,
    base_url: String,
}

impl RewardsClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("spotlight/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Request {
                endpoint: "client".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "upstream request");

        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::Request {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }

        resp.json::<T>().await.map_err(|e| UpstreamError::Parse {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RewardsApi for RewardsClient {
    async fn winner_history(&self) -> Result<Vec<Winner>, UpstreamError> {
        let resp: WinnerHistoryResponse = self.get_json(WINNER_HISTORY, &[]).await?;
        Ok(resp.result.history.winners)
    }

    async fn user_by_username(&self, username: &str) -> Result<ProfileRecord, UpstreamError> {
        let resp: UserByUsernameResponse = self
            .get_json(USER_BY_USERNAME, &[("username", username)])
            .await?;
        Ok(resp.result.user)
    }
}
