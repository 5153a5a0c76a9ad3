//! In-Memory Review Store Adapter

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ReviewId, Timestamp};
use crate::domain::review::{NewReview, Review};
use crate::ports::ReviewStore;

/// Append-only review log with a monotonically increasing id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewStore {
    reviews: Arc<RwLock<Vec<Review>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored review, oldest first.
    pub async fn all(&self) -> Vec<Review> {
        self.reviews.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.reviews.read().await.len()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn save_review(&self, review: &NewReview) -> Result<Review, DomainError> {
        let id = ReviewId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = Review::from_new(id, review.clone(), Timestamp::now());
        self.reviews.write().await.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{GuildId, UserId};
    use crate::domain::review::{Comment, CommentBounds, Rating};

    fn new_review(guild: &str, product: &str) -> NewReview {
        NewReview {
            user_id: UserId::new("u1").unwrap(),
            user_name: "Alice".to_string(),
            guild_id: GuildId::new(guild).unwrap(),
            rating: Rating::new(4).unwrap(),
            comment: Comment::new("Solid product, would buy", CommentBounds::default()).unwrap(),
            product: product.to_string(),
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = InMemoryReviewStore::new();
        let first = store.save_review(&new_review("g1", "A")).await.unwrap();
        let second = store.save_review(&new_review("g1", "B")).await.unwrap();

        assert_eq!(first.id.value(), 1);
        assert_eq!(second.id.value(), 2);
        assert_eq!(store.count().await, 2);
    }
}
