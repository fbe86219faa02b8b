use serde::{Deserialize, Serialize};

/// A single post ("cast") on a user's profile.
///
/// `engagement` is always the saturating sum of likes, recasts and replies;
/// build casts with [`Cast::new`] so the derived value cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cast {
    /// Identifier, unique within one user's post set
    pub id: u64,
    /// Body text
    pub text: String,
    /// Display timestamp ("2h ago", "Jan 15, 2022")
    pub timestamp: String,
    pub likes: u64,
    pub recasts: u64,
    pub replies: u64,
    /// Derived engagement score
    pub engagement: u64,
}

impl Cast {
    pub fn new(
        id: u64,
        text: impl Into<String>,
        timestamp: impl Into<String>,
        likes: u64,
        recasts: u64,
        replies: u64,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            timestamp: timestamp.into(),
            likes,
            recasts,
            replies,
            engagement: likes.saturating_add(recasts).saturating_add(replies),
        }
    }

    /// Engagement recomputed from the raw counters.
    pub const fn computed_engagement(&self) -> u64 {
        self.likes
            .saturating_add(self.recasts)
            .saturating_add(self.replies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_is_sum_of_counters() {
        let cast = Cast::new(1, "hello", "2h ago", 1247, 342, 89);
        assert_eq!(cast.engagement, 1678);
        assert_eq!(cast.computed_engagement(), cast.engagement);
    }

    #[test]
    fn test_engagement_saturates() {
        let cast = Cast::new(2, "viral", "1m ago", u64::MAX, 5, u64::MAX);
        assert_eq!(cast.engagement, u64::MAX);
        assert_eq!(cast.computed_engagement(), u64::MAX);
    }

    #[test]
    fn test_cast_serializes_camel_case() {
        let cast = Cast::new(7, "gm", "4h ago", 1, 2, 3);
        let json = serde_json::to_value(&cast).unwrap();
        assert_eq!(json["engagement"], 6);
        assert_eq!(json["recasts"], 2);
        assert_eq!(json["timestamp"], "4h ago");
    }
}
