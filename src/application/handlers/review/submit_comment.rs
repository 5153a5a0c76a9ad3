//! SubmitCommentHandler - second step of the review flow.

use crate::application::session_registry::SessionRegistry;
use crate::domain::foundation::{GuildId, UserId};
use crate::domain::review::{
    Comment, CommentBounds, ReviewError, ReviewSession, ReviewStep, SessionKey,
};

/// The comment modal was submitted.
#[derive(Debug, Clone)]
pub struct SubmitCommentCommand {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub text: String,
}

#[derive(Clone)]
pub struct SubmitCommentHandler {
    registry: SessionRegistry,
    bounds: CommentBounds,
}

impl SubmitCommentHandler {
    pub fn new(registry: SessionRegistry, bounds: CommentBounds) -> Self {
        Self { registry, bounds }
    }

    /// Records the comment and returns the session at the `Product` step.
    ///
    /// # Errors
    ///
    /// - `SessionExpired` if the user has no session or has not rated yet
    /// - `StepAlreadyCompleted` if the comment was already recorded
    /// - `ValidationFailed` if the text is blank or outside the length bounds
    pub async fn handle(&self, cmd: SubmitCommentCommand) -> Result<ReviewSession, ReviewError> {
        let key = SessionKey::new(cmd.guild_id, cmd.user_id);
        let mut guard = self.registry.get(&key).await?;

        guard.session().require_step(ReviewStep::Comment)?;
        let comment = Comment::new(cmd.text, self.bounds)?;
        guard.session_mut().submit_comment(comment)?;

        tracing::debug!(session_id = %guard.session().id(), "Comment submitted");
        Ok(guard.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::Rating;

    fn key() -> SessionKey {
        SessionKey::new(GuildId::new("guild-1").unwrap(), UserId::new("user-1").unwrap())
    }

    fn command(text: &str) -> SubmitCommentCommand {
        SubmitCommentCommand {
            guild_id: key().guild_id,
            user_id: key().user_id,
            text: text.into(),
        }
    }

    async fn rated_registry() -> SessionRegistry {
        let registry = SessionRegistry::new();
        let mut guard = registry.get_or_create(&key(), "Alice").await;
        guard.session_mut().choose_rating(Rating::new(3).unwrap()).unwrap();
        drop(guard);
        registry
    }

    #[tokio::test]
    async fn comment_advances_to_product() {
        let registry = rated_registry().await;
        let session = SubmitCommentHandler::new(registry, CommentBounds::default())
            .handle(command("Friendly staff and fast"))
            .await
            .unwrap();

        assert_eq!(session.step(), ReviewStep::Product);
        assert_eq!(session.comment().unwrap().as_str(), "Friendly staff and fast");
    }

    #[tokio::test]
    async fn comment_without_session_is_expired() {
        let handler = SubmitCommentHandler::new(SessionRegistry::new(), CommentBounds::default());
        let err = handler.handle(command("Friendly staff and fast")).await.unwrap_err();
        assert_eq!(err, ReviewError::SessionExpired);
    }

    #[tokio::test]
    async fn comment_before_rating_is_expired() {
        let registry = SessionRegistry::new();
        drop(registry.get_or_create(&key(), "Alice").await);

        let err = SubmitCommentHandler::new(registry, CommentBounds::default())
            .handle(command("Friendly staff and fast"))
            .await
            .unwrap_err();
        assert_eq!(err, ReviewError::SessionExpired);
    }

    #[tokio::test]
    async fn short_comment_leaves_session_at_comment_step() {
        let registry = rated_registry().await;
        let err = SubmitCommentHandler::new(registry.clone(), CommentBounds::default())
            .handle(command("meh"))
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::ValidationFailed { .. }));
        let guard = registry.get(&key()).await.unwrap();
        assert_eq!(guard.session().step(), ReviewStep::Comment);
    }

    #[tokio::test]
    async fn custom_bounds_are_applied() {
        let registry = rated_registry().await;
        let session = SubmitCommentHandler::new(registry, CommentBounds::new(2, 5))
            .handle(command("ok!"))
            .await
            .unwrap();
        assert_eq!(session.comment().unwrap().as_str(), "ok!");
    }

    #[tokio::test]
    async fn second_comment_is_rejected() {
        let registry = rated_registry().await;
        let handler = SubmitCommentHandler::new(registry, CommentBounds::default());
        handler.handle(command("First thoughts here")).await.unwrap();

        let err = handler.handle(command("Second thoughts here")).await.unwrap_err();
        assert!(matches!(err, ReviewError::StepAlreadyCompleted { .. }));
    }
}
