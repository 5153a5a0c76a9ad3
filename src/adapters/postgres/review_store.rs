//! PostgreSQL implementation of ReviewStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ReviewId, Timestamp};
use crate::domain::review::{NewReview, Review};
use crate::ports::ReviewStore;

/// PostgreSQL implementation of the ReviewStore port.
///
/// The database assigns `id` (BIGSERIAL) and `created_at`.
pub struct PostgresReviewStore {
    pool: PgPool,
}

impl PostgresReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PostgresReviewStore {
    async fn save_review(&self, review: &NewReview) -> Result<Review, DomainError> {
        let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO reviews (user_id, user_name, guild_id, rating, comment, product)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_at
            "#,
        )
        .bind(review.user_id.as_str())
        .bind(&review.user_name)
        .bind(review.guild_id.as_str())
        .bind(i16::from(review.rating.value()))
        .bind(review.comment.as_str())
        .bind(&review.product)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save review", e))?;

        Ok(Review::from_new(
            ReviewId::new(id),
            review.clone(),
            Timestamp::from_datetime(created_at),
        ))
    }
}
