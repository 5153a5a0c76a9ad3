//! ChooseRatingHandler - first step of the review flow.

use crate::application::session_registry::SessionRegistry;
use crate::domain::foundation::{GuildId, UserId};
use crate::domain::review::{Rating, ReviewError, ReviewSession, SessionKey};

/// A rating button was pressed.
#[derive(Debug, Clone)]
pub struct ChooseRatingCommand {
    pub guild_id: GuildId,
    pub user_id: UserId,
    /// Used if the press creates the session.
    pub display_name: String,
    pub stars: u8,
}

#[derive(Clone)]
pub struct ChooseRatingHandler {
    registry: SessionRegistry,
}

impl ChooseRatingHandler {
    pub fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Records the rating and returns the session at the `Comment` step.
    ///
    /// Creates the session when the user has none, so anyone can start
    /// from a shared review menu.
    pub async fn handle(&self, cmd: ChooseRatingCommand) -> Result<ReviewSession, ReviewError> {
        let rating = Rating::new(cmd.stars)?;
        let key = SessionKey::new(cmd.guild_id, cmd.user_id);

        let mut guard = self.registry.get_or_create(&key, &cmd.display_name).await;
        guard.session_mut().choose_rating(rating)?;

        tracing::debug!(
            session_id = %guard.session().id(),
            stars = rating.value(),
            "Rating chosen"
        );
        Ok(guard.snapshot())
    }
}
