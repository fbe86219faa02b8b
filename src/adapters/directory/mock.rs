//! Static featured-user dataset.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Cast, UserData, UserListing, UserSummary, PLACEHOLDER_AVATAR};
use crate::domain::ports::{ProfileSource, UserDirectory};

/// In-process directory serving a fixed list of users and a few profiles.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    users: Vec<UserSummary>,
    profiles: HashMap<String, UserData>,
}

impl MockDirectory {
    pub fn new(users: Vec<UserSummary>, profiles: Vec<UserData>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|p| (p.summary.username.clone(), p))
            .collect();
        Self { users, profiles }
    }

    /// Usernames that have a full profile record.
    pub fn profile_usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new(featured_users(), profiles())
    }
}

#[async_trait]
impl UserDirectory for MockDirectory {
    async fn list_users(&self) -> DomainResult<UserListing> {
        Ok(UserListing::complete(self.users.clone()))
    }
}

#[async_trait]
impl ProfileSource for MockDirectory {
    async fn get_profile(&self, username: &str) -> DomainResult<UserData> {
        self.profiles
            .get(username)
            .cloned()
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))
    }
}

fn user(
    username: &str,
    display_name: &str,
    bio: &str,
    followers: &str,
    following: &str,
    join_date: &str,
) -> UserSummary {
    UserSummary {
        username: username.to_string(),
        display_name: display_name.to_string(),
        avatar: PLACEHOLDER_AVATAR.to_string(),
        bio: bio.to_string(),
        followers: followers.to_string(),
        following: following.to_string(),
        verified: true,
        join_date: join_date.to_string(),
    }
}

fn featured_users() -> Vec<UserSummary> {
    vec![
        user(
            "dwr",
            "Dan Romero",
            "Co-founder of Farcaster. Building the future of decentralized social.",
            "125.2K",
            "892",
            "Jan 2022",
        ),
        user(
            "vitalik",
            "Vitalik Buterin",
            "Ethereum co-founder. Interested in crypto, governance, and coordination.",
            "89.1K",
            "234",
            "Mar 2022",
        ),
        user(
            "jessepollak",
            "Jesse Pollak",
            "Building Base at Coinbase. Onchain is the next online.",
            "67.8K",
            "456",
            "Feb 2022",
        ),
        user(
            "balajis",
            "Balaji Srinivasan",
            "Former CTO of Coinbase. Angel investor and entrepreneur.",
            "156.3K",
            "1.2K",
            "Apr 2022",
        ),
        user(
            "linda",
            "Linda Xie",
            "Co-founder of Scalar Capital. Previously PM at Coinbase.",
            "45.6K",
            "789",
            "May 2022",
        ),
        user(
            "punk6529",
            "6529",
            "NFT collector and advocate for decentralization and open metaverse.",
            "78.9K",
            "567",
            "Jun 2022",
        ),
    ]
}

fn profiles() -> Vec<UserData> {
    let users = featured_users();
    let summary = |name: &str| {
        users
            .iter()
            .find(|u| u.username == name)
            .cloned()
            .unwrap_or_else(|| user(name, name, "", "0", "0", ""))
    };

    vec![
        UserData {
            summary: summary("dwr"),
            top_casts: vec![
                Cast::new(
                    1,
                    "The future of social media is decentralized. We're building the infrastructure to make it happen.",
                    "2h ago",
                    1247,
                    342,
                    89,
                ),
                Cast::new(
                    2,
                    "Just shipped a major update to the Farcaster protocol. Excited to see what developers build next! 🚀",
                    "1d ago",
                    892,
                    234,
                    156,
                ),
                Cast::new(
                    3,
                    "Web3 social is not about replacing existing platforms, it's about giving users ownership of their data and relationships.",
                    "3d ago",
                    756,
                    189,
                    67,
                ),
            ],
            first_casts: vec![
                Cast::new(
                    4,
                    "Hello Farcaster! Excited to be building the future of decentralized social media.",
                    "Jan 15, 2022",
                    234,
                    89,
                    45,
                ),
                Cast::new(
                    5,
                    "Testing out this new protocol we've been working on. The possibilities are endless!",
                    "Jan 16, 2022",
                    156,
                    34,
                    23,
                ),
                Cast::new(
                    6,
                    "Decentralization isn't just a buzzword - it's the foundation of a more open internet.",
                    "Jan 18, 2022",
                    189,
                    67,
                    34,
                ),
            ],
        },
        UserData {
            summary: summary("vitalik"),
            top_casts: vec![
                Cast::new(
                    7,
                    "Ethereum's transition to proof-of-stake has been one of the most complex technical upgrades in blockchain history.",
                    "4h ago",
                    2156,
                    567,
                    234,
                ),
                Cast::new(
                    8,
                    "The future of governance lies in finding the right balance between efficiency and decentralization.",
                    "2d ago",
                    1834,
                    445,
                    189,
                ),
            ],
            first_casts: vec![Cast::new(
                9,
                "Excited to be here on Farcaster! Looking forward to more decentralized conversations.",
                "Mar 10, 2022",
                567,
                234,
                89,
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_six_featured_users() {
        let directory = MockDirectory::default();
        let listing = directory.list_users().await.unwrap();
        assert_eq!(listing.users.len(), 6);
        assert!(listing.is_complete());
        assert_eq!(listing.users[0].username, "dwr");
    }

    #[tokio::test]
    async fn test_known_profiles_have_consistent_engagement() {
        let directory = MockDirectory::default();
        for name in directory.profile_usernames() {
            let profile = directory.get_profile(name).await.unwrap();
            assert!(!profile.top_casts.is_empty());
            assert!(!profile.first_casts.is_empty());
            for cast in profile.all_casts() {
                assert_eq!(cast.engagement, cast.likes + cast.recasts + cast.replies);
            }
        }
    }

    #[tokio::test]
    async fn test_first_dwr_cast_engagement() {
        let profile = MockDirectory::default().get_profile("dwr").await.unwrap();
        assert_eq!(profile.top_casts[0].engagement, 1678);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let err = MockDirectory::default()
            .get_profile("nobody")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound(name) if name == "nobody"));
    }
}
