use std::time::Duration;

use thiserror::Error;

/// Key-value store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors from the external rewards/profile API
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Failed to parse {endpoint} response: {message}")]
    Parse { endpoint: String, message: String },

    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors surfaced by the viewer-side fetchers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("User not found")]
    NotFound,

    #[error("Failed to load: {0}")]
    FailedToLoad(String),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),
}
