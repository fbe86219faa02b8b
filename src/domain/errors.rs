//! Domain errors for the Spotlight directory.

use thiserror::Error;

/// Domain-level errors that can occur while serving or assembling user data.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("Upstream request failed: {0}")]
    UpstreamFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

/// Trim a raw username and reject it when nothing is left.
///
/// Mirrors the search box: a blank query never navigates anywhere.
pub fn normalize_username(raw: &str) -> DomainResult<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidUsername(raw.to_string()));
    }
    Ok(trimmed)
}
