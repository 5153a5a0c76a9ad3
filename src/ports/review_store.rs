//! Review store port (append-only).

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::review::{NewReview, Review};

/// Port for persisting completed reviews.
///
/// Reviews are write-once. The store assigns the identifier and creation time.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Insert a review and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure; nothing is stored
    async fn save_review(&self, review: &NewReview) -> Result<Review, DomainError>;
}
