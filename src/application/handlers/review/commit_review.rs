//! ReviewCommitter - persists a completed session, announces it, clears it.
//!
//! Ordering is fixed: persist, then clear, then notify. A storage failure
//! aborts the commit and leaves the session at the product step so the user
//! can pick again. The announcement is bounded by a deadline and a failure is
//! only logged.

use std::sync::Arc;
use std::time::Duration;

use crate::application::session_registry::SessionGuard;
use crate::domain::review::{Review, ReviewError};
use crate::domain::settings::GuildSettings;
use crate::ports::{ReviewNotifier, ReviewStore};

/// What happened to the channel announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The guild has no review channel.
    NotConfigured,
    Delivered,
    /// Delivery failed; the review is stored regardless.
    Failed(String),
}

/// Result of a successful commit.
#[derive(Debug, Clone)]
pub struct CommitOutcome {
    pub review: Review,
    /// Settings the review was committed under, for rendering.
    pub settings: GuildSettings,
    pub notification: NotificationOutcome,
}

/// Longest the committer waits on a channel announcement.
pub const DEFAULT_ANNOUNCE_TIMEOUT: Duration = Duration::from_secs(3);

/// Commits completed review sessions.
#[derive(Clone)]
pub struct ReviewCommitter {
    reviews: Arc<dyn ReviewStore>,
    notifier: Arc<dyn ReviewNotifier>,
    announce_timeout: Duration,
}

impl ReviewCommitter {
    pub fn new(reviews: Arc<dyn ReviewStore>, notifier: Arc<dyn ReviewNotifier>) -> Self {
        Self {
            reviews,
            notifier,
            announce_timeout: DEFAULT_ANNOUNCE_TIMEOUT,
        }
    }

    pub fn with_announce_timeout(mut self, timeout: Duration) -> Self {
        self.announce_timeout = timeout;
        self
    }

    /// Commits the session held by `guard`, which must be at `Complete`.
    ///
    /// The session lock is held until the commit finishes, so a second
    /// selection for the same user can never store a duplicate.
    pub async fn commit(
        &self,
        mut guard: SessionGuard,
        settings: &GuildSettings,
    ) -> Result<CommitOutcome, ReviewError> {
        let submission = guard.session().to_submission()?;
        let session_id = *guard.session().id();

        let review = match self.reviews.save_review(&submission).await {
            Ok(review) => review,
            Err(err) => {
                tracing::error!(
                    session_id = %session_id,
                    guild_id = %submission.guild_id,
                    user_id = %submission.user_id,
                    error = %err,
                    "Failed to store review"
                );
                guard.session_mut().reopen_product_step();
                return Err(ReviewError::from(err));
            }
        };

        tracing::info!(
            session_id = %session_id,
            review_id = %review.id,
            guild_id = %review.guild_id,
            rating = review.rating.value(),
            "Review stored"
        );

        guard.finish().await;

        let notification = match &settings.review_channel_id {
            None => NotificationOutcome::NotConfigured,
            Some(channel_id) => {
                let announce = self.notifier.announce(channel_id, &review, settings);
                let failure = match tokio::time::timeout(self.announce_timeout, announce).await {
                    Ok(Ok(())) => None,
                    Ok(Err(err)) => Some(err.to_string()),
                    Err(_) => Some(format!(
                        "announcement timed out after {}ms",
                        self.announce_timeout.as_millis()
                    )),
                };
                match failure {
                    None => NotificationOutcome::Delivered,
                    Some(reason) => {
                        tracing::warn!(
                            review_id = %review.id,
                            channel_id = %channel_id,
                            error = %reason,
                            "Review announcement failed"
                        );
                        NotificationOutcome::Failed(reason)
                    }
                }
            }
        };

        Ok(CommitOutcome {
            review,
            settings: settings.clone(),
            notification,
        })
    }
}
