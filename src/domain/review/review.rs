//! Persisted review records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GuildId, ReviewId, Timestamp, UserId};

use super::{Comment, Rating};

/// A finished review that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub user_id: UserId,
    /// Display name at the time the session started.
    pub user_name: String,
    pub guild_id: GuildId,
    pub rating: Rating,
    pub comment: Comment,
    pub product: String,
}

/// A stored review. Write-once: never updated or deleted by the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub user_name: String,
    pub guild_id: GuildId,
    pub rating: Rating,
    pub comment: Comment,
    pub product: String,
    pub created_at: Timestamp,
}

impl Review {
    /// Attaches store-assigned identity to a new review.
    pub fn from_new(id: ReviewId, review: NewReview, created_at: Timestamp) -> Self {
        Self {
            id,
            user_id: review.user_id,
            user_name: review.user_name,
            guild_id: review.guild_id,
            rating: review.rating,
            comment: review.comment,
            product: review.product,
            created_at,
        }
    }
}
