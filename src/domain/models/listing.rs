use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// A lookup that did not make it into the result set, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmittedLookup {
    /// Username (or fid when no username was known)
    pub key: String,
    pub reason: String,
}

/// Per-item result of one fan-out lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Resolved(UserSummary),
    Omitted(OmittedLookup),
}

/// User list together with anything that was left out while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListing {
    /// Number of entries the source attempted to resolve
    pub requested: usize,
    pub users: Vec<UserSummary>,
    pub omitted: Vec<OmittedLookup>,
}

impl UserListing {
    /// A listing where every requested entry resolved.
    pub fn complete(users: Vec<UserSummary>) -> Self {
        Self {
            requested: users.len(),
            users,
            omitted: Vec::new(),
        }
    }

    /// Assemble a listing from ordered outcomes.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = LookupOutcome>) -> Self {
        let mut listing = Self::default();
        for outcome in outcomes {
            listing.requested += 1;
            match outcome {
                LookupOutcome::Resolved(user) => listing.users.push(user),
                LookupOutcome::Omitted(omitted) => listing.omitted.push(omitted),
            }
        }
        listing
    }

    pub fn is_complete(&self) -> bool {
        self.omitted.is_empty()
    }

    pub fn omitted_count(&self) -> usize {
        self.omitted.len()
    }
}
