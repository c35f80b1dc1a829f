//! Visitor ratings appended to the `portfolioRatings` log.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One submitted rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Unique id
    pub id: Uuid,
    /// Stars, 1 to 5
    pub stars: u8,
    /// Optional free-text comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Submission time
    pub submitted_at: DateTime<Utc>,
}

impl Rating {
    /// Creates a rating stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if `stars` is outside 1..=5.
    pub fn new(stars: u8, comment: Option<String>) -> Result<Self> {
        if !(1..=5).contains(&stars) {
            anyhow::bail!("Rating must be between 1 and 5 stars, got {stars}");
        }

        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            id: Uuid::new_v4(),
            stars,
            comment,
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_range() {
        assert!(Rating::new(0, None).is_err());
        assert!(Rating::new(6, None).is_err());
        assert!(Rating::new(1, None).is_ok());
        assert!(Rating::new(5, None).is_ok());
    }

    #[test]
    fn test_blank_comment_dropped() {
        let rating = Rating::new(4, Some("   ".to_string())).unwrap();
        assert_eq!(rating.comment, None);

        let rating = Rating::new(4, Some(" nice ".to_string())).unwrap();
        assert_eq!(rating.comment.as_deref(), Some("nice"));
    }
}
