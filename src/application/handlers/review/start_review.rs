//! StartReviewHandler - opens the review flow for a user.

use crate::application::session_registry::SessionRegistry;
use crate::domain::foundation::{GuildId, UserId};
use crate::domain::review::{ReviewSession, ReviewStep, SessionKey};

/// Command issued by `/reviewmenu`.
#[derive(Debug, Clone)]
pub struct StartReviewCommand {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub display_name: String,
}

#[derive(Clone)]
pub struct StartReviewHandler {
    registry: SessionRegistry,
}

impl StartReviewHandler {
    pub fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    /// Returns the session at the `Rating` step.
    ///
    /// A session already in progress restarts from the first step.
    pub async fn handle(&self, cmd: StartReviewCommand) -> ReviewSession {
        let key = SessionKey::new(cmd.guild_id, cmd.user_id);
        let mut guard = self.registry.get_or_create(&key, &cmd.display_name).await;

        if guard.session().step() != ReviewStep::Rating {
            guard.session_mut().restart();
        }

        tracing::info!(
            session_id = %guard.session().id(),
            guild_id = %key.guild_id,
            user_id = %key.user_id,
            "Review started"
        );
        guard.snapshot()
    }
}
