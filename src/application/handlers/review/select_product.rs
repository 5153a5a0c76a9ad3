//! SelectProductHandler - final step; selecting a product commits the review.

use crate::application::handlers::settings::{GetSettingsHandler, GetSettingsQuery};
use crate::application::session_registry::SessionRegistry;
use crate::domain::foundation::{GuildId, UserId};
use crate::domain::review::{ReviewError, ReviewStep, SessionKey};

use super::{CommitOutcome, ReviewCommitter};

/// An entry of the product menu was chosen.
#[derive(Debug, Clone)]
pub struct SelectProductCommand {
    pub guild_id: GuildId,
    pub user_id: UserId,
    /// Position in the guild's catalogue.
    pub catalog_index: usize,
}

#[derive(Clone)]
pub struct SelectProductHandler {
    registry: SessionRegistry,
    settings: GetSettingsHandler,
    committer: ReviewCommitter,
}

impl SelectProductHandler {
    pub fn new(
        registry: SessionRegistry,
        settings: GetSettingsHandler,
        committer: ReviewCommitter,
    ) -> Self {
        Self {
            registry,
            settings,
            committer,
        }
    }

    /// Records the product and commits the review.
    ///
    /// # Errors
    ///
    /// - `SessionExpired` if the user has no session or has no comment yet
    /// - `CatalogEmpty` if the guild has no products
    /// - `ValidationFailed` if the index is outside the catalogue; the
    ///   session is left unchanged
    /// - `StorageFailure` if the review could not be stored
    pub async fn handle(&self, cmd: SelectProductCommand) -> Result<CommitOutcome, ReviewError> {
        let key = SessionKey::new(cmd.guild_id.clone(), cmd.user_id);
        let mut guard = self.registry.get(&key).await?;
        guard.session().require_step(ReviewStep::Product)?;

        let settings = self
            .settings
            .handle(GetSettingsQuery {
                guild_id: cmd.guild_id,
            })
            .await;

        if !settings.has_products() {
            return Err(ReviewError::CatalogEmpty);
        }
        let product = settings
            .product(cmd.catalog_index)
            .ok_or_else(|| {
                ReviewError::validation(
                    "catalog_index",
                    format!(
                        "product {} is not in the catalogue of {}",
                        cmd.catalog_index,
                        settings.products.len()
                    ),
                )
            })?
            .to_string();

        guard.session_mut().select_product(product)?;
        self.committer.commit(guard, &settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review::commit_review::tests::{
        MockNotifier, MockReviewStore,
    };
    use crate::application::handlers::settings::get_settings::tests::MockSettingsStore;
    use crate::domain::review::{Comment, CommentBounds, Rating};
    use crate::domain::settings::GuildSettings;
    use std::sync::Arc;

    fn key() -> SessionKey {
        SessionKey::new(GuildId::new("guild-1").unwrap(), UserId::new("user-1").unwrap())
    }

    fn command(index: usize) -> SelectProductCommand {
        SelectProductCommand {
            guild_id: key().guild_id,
            user_id: key().user_id,
            catalog_index: index,
        }
    }

    fn settings(products: &[&str]) -> GuildSettings {
        let mut settings = GuildSettings::defaults(key().guild_id);
        settings.products = products.iter().map(|p| p.to_string()).collect();
        settings
    }

    async fn commented_registry() -> SessionRegistry {
        let registry = SessionRegistry::new();
        let mut guard = registry.get_or_create(&key(), "Alice").await;
        let session = guard.session_mut();
        session.choose_rating(Rating::new(5).unwrap()).unwrap();
        session
            .submit_comment(Comment::new("Great service, very happy", CommentBounds::default()).unwrap())
            .unwrap();
        drop(guard);
        registry
    }

    fn handler(
        registry: SessionRegistry,
        settings: GuildSettings,
        reviews: Arc<MockReviewStore>,
    ) -> SelectProductHandler {
        SelectProductHandler::new(
            registry,
            GetSettingsHandler::new(Arc::new(MockSettingsStore::with_settings(settings))),
            ReviewCommitter::new(reviews, Arc::new(MockNotifier::new())),
        )
    }

    #[tokio::test]
    async fn selection_commits_the_review() {
        let registry = commented_registry().await;
        let reviews = Arc::new(MockReviewStore::new());
        let outcome = handler(registry.clone(), settings(&["Widget", "Gadget"]), reviews.clone())
            .handle(command(1))
            .await
            .unwrap();

        assert_eq!(outcome.review.product, "Gadget");
        assert_eq!(outcome.review.rating.value(), 5);
        assert_eq!(outcome.review.user_name, "Alice");
        assert_eq!(reviews.saved().len(), 1);
        assert!(registry.get(&key()).await.is_err());
    }

    #[tokio::test]
    async fn out_of_range_index_leaves_session_untouched() {
        let registry = commented_registry().await;
        let reviews = Arc::new(MockReviewStore::new());
        let err = handler(registry.clone(), settings(&["Widget"]), reviews.clone())
            .handle(command(1))
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::ValidationFailed { .. }));
        assert!(reviews.saved().is_empty());
        let guard = registry.get(&key()).await.unwrap();
        assert_eq!(guard.session().step(), ReviewStep::Product);
    }

    #[tokio::test]
    async fn empty_catalogue_is_reported() {
        let registry = commented_registry().await;
        let err = handler(registry, settings(&[]), Arc::new(MockReviewStore::new()))
            .handle(command(0))
            .await
            .unwrap_err();
        assert_eq!(err, ReviewError::CatalogEmpty);
    }

    #[tokio::test]
    async fn selection_before_comment_is_expired() {
        let registry = SessionRegistry::new();
        let mut guard = registry.get_or_create(&key(), "Alice").await;
        guard.session_mut().choose_rating(Rating::new(2).unwrap()).unwrap();
        drop(guard);

        let err = handler(registry, settings(&["Widget"]), Arc::new(MockReviewStore::new()))
            .handle(command(0))
            .await
            .unwrap_err();
        assert_eq!(err, ReviewError::SessionExpired);
    }

    #[tokio::test]
    async fn second_selection_after_commit_is_expired() {
        let registry = commented_registry().await;
        let reviews = Arc::new(MockReviewStore::new());
        let handler = handler(registry, settings(&["Widget"]), reviews.clone());

        handler.handle(command(0)).await.unwrap();
        let err = handler.handle(command(0)).await.unwrap_err();

        assert_eq!(err, ReviewError::SessionExpired);
        assert_eq!(reviews.saved().len(), 1);
    }
}
