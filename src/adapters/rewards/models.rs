//! Response envelopes of the rewards/profile API.
//!
//! Both endpoints wrap their payload in `{"result": {...}}`; only the
//! fields the aggregator reads are modeled.

use serde::Deserialize;

use crate::domain::models::{ProfileRecord, Winner};

#[derive(Debug, Deserialize)]
pub struct WinnerHistoryResponse {
    pub result: WinnerHistoryResult,
}

#[derive(Debug, Deserialize)]
pub struct WinnerHistoryResult {
    pub history: WinnerHistory,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerHistory {
    #[serde(default)]
    pub period_start_timestamp: Option<i64>,
    #[serde(default)]
    pub winners: Vec<Winner>,
}

#[derive(Debug, Deserialize)]
pub struct UserByUsernameResponse {
    pub result: UserByUsernameResult,
}

#[derive(Debug, Deserialize)]
pub struct UserByUsernameResult {
    pub user: ProfileRecord,
}
