//! In-flight review session.
//!
//! A session tracks one user's progress through the review flow inside one
//! guild. It carries an explicit current step; inputs are accepted only when
//! they belong to that step.
//!
//! # Invariants
//!
//! - Fields are filled strictly in step order: `rating` is set iff step is past
//!   `Rating`, `comment` iff past `Comment`, `product` iff `Complete`.
//! - `display_name` is captured when the session is created and never changes.
//! - An input for a step the session has not reached yet means earlier data is
//!   missing and resolves to `SessionExpired`, never to default values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GuildId, SessionId, StateMachine, Timestamp, UserId};

use super::{Comment, NewReview, Rating, ReviewError, ReviewStep};

/// Registry key: one live session per user per guild.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub guild_id: GuildId,
    pub user_id: UserId,
}

impl SessionKey {
    pub fn new(guild_id: GuildId, user_id: UserId) -> Self {
        Self { guild_id, user_id }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.guild_id, self.user_id)
    }
}

/// One user's in-progress review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSession {
    id: SessionId,
    key: SessionKey,
    display_name: String,
    step: ReviewStep,
    rating: Option<Rating>,
    comment: Option<Comment>,
    product: Option<String>,
    started_at: Timestamp,
    updated_at: Timestamp,
}

impl ReviewSession {
    /// Starts a session at the `Rating` step.
    ///
    /// A blank display name falls back to the user id so the stored review
    /// always names its author.
    pub fn new(key: SessionKey, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let display_name = if display_name.trim().is_empty() {
            key.user_id.to_string()
        } else {
            display_name
        };
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            key,
            display_name,
            step: ReviewStep::Rating,
            rating: None,
            comment: None,
            product: None,
            started_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn guild_id(&self) -> &GuildId {
        &self.key.guild_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.key.user_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn step(&self) -> ReviewStep {
        self.step
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Puts the session back at `Rating`, dropping any collected answers.
    pub fn restart(&mut self) {
        self.step = ReviewStep::Rating;
        self.rating = None;
        self.comment = None;
        self.product = None;
        self.touch();
    }

    /// Records the rating and moves to `Comment`.
    ///
    /// A rating on a session that is already further along, including an
    /// orphaned `Complete` one, restarts it: the new rating wins and later
    /// answers are discarded.
    pub fn choose_rating(&mut self, rating: Rating) -> Result<(), ReviewError> {
        if self.step != ReviewStep::Rating {
            self.restart();
        }
        let next = self.step.transition_to(ReviewStep::Comment)?;
        self.rating = Some(rating);
        self.step = next;
        self.touch();
        Ok(())
    }

    /// Records the comment and moves to `Product`.
    pub fn submit_comment(&mut self, comment: Comment) -> Result<(), ReviewError> {
        self.require_step(ReviewStep::Comment)?;
        let next = self.step.transition_to(ReviewStep::Product)?;
        self.comment = Some(comment);
        self.step = next;
        self.touch();
        Ok(())
    }

    /// Records the chosen product and moves to `Complete`.
    pub fn select_product(&mut self, product: impl Into<String>) -> Result<(), ReviewError> {
        self.require_step(ReviewStep::Product)?;
        let next = self.step.transition_to(ReviewStep::Complete)?;
        self.product = Some(product.into());
        self.step = next;
        self.touch();
        Ok(())
    }

    /// Undoes `select_product` after a failed commit so the user can retry.
    pub fn reopen_product_step(&mut self) {
        if self.step == ReviewStep::Complete {
            self.product = None;
            self.step = ReviewStep::Product;
            self.touch();
        }
    }

    /// Checks that the session is waiting for input of `expected`.
    ///
    /// Behind `expected` means earlier answers are missing (`SessionExpired`);
    /// past it means the input is stale.
    pub fn require_step(&self, expected: ReviewStep) -> Result<(), ReviewError> {
        if self.step == expected {
            Ok(())
        } else if self.step < expected {
            Err(ReviewError::SessionExpired)
        } else {
            Err(ReviewError::StepAlreadyCompleted {
                expected,
                actual: self.step,
            })
        }
    }

    /// Builds the review to persist from a completed session.
    pub fn to_submission(&self) -> Result<NewReview, ReviewError> {
        match (self.step, self.rating, &self.comment, &self.product) {
            (ReviewStep::Complete, Some(rating), Some(comment), Some(product)) => Ok(NewReview {
                user_id: self.key.user_id.clone(),
                user_name: self.display_name.clone(),
                guild_id: self.key.guild_id.clone(),
                rating,
                comment: comment.clone(),
                product: product.clone(),
            }),
            _ => Err(ReviewError::SessionExpired),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
