use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cast::Cast;

/// Avatar used when a source has no picture for a user.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=80&width=80";

/// Public summary of a featured user.
///
/// Follower and following counts are display strings ("125.2K"), not numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Unique, stable identifier
    pub username: String,
    pub display_name: String,
    /// Avatar URL
    pub avatar: String,
    pub bio: String,
    pub followers: String,
    pub following: String,
    pub verified: bool,
    /// Display join date ("Jan 2022"), empty when unknown
    pub join_date: String,
}

impl UserSummary {
    /// Case-insensitive match against username or display name.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.username.to_lowercase().contains(&needle)
            || self.display_name.to_lowercase().contains(&needle)
    }
}

/// Full profile record: the summary plus the two cast lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(flatten)]
    pub summary: UserSummary,
    pub top_casts: Vec<Cast>,
    pub first_casts: Vec<Cast>,
}

impl UserData {
    /// Casts shown under the given profile tab.
    pub fn casts(&self, tab: CastTab) -> &[Cast] {
        match tab {
            CastTab::Top => &self.top_casts,
            CastTab::First => &self.first_casts,
        }
    }

    /// Iterate over every cast on the profile, top casts first.
    pub fn all_casts(&self) -> impl Iterator<Item = &Cast> {
        self.top_casts.iter().chain(self.first_casts.iter())
    }
}

/// Profile tab selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastTab {
    #[default]
    Top,
    First,
}

impl CastTab {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::First => "first",
        }
    }
}

impl fmt::Display for CastTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CastTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "first" => Ok(Self::First),
            other => Err(format!("unknown tab '{other}', expected 'top' or 'first'")),
        }
    }
}
