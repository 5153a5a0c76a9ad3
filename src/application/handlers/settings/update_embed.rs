//! UpdateEmbedHandler - Command handler for the embed configuration form.

use std::sync::Arc;

use crate::domain::foundation::GuildId;
use crate::domain::settings::{GuildSettings, MemberPermissions, SettingsError, SettingsPatch};
use crate::ports::SettingsStore;

use super::{AuthorizeAdminHandler, AuthorizeAdminQuery};

/// Command to replace the review form's title, description and color.
#[derive(Debug, Clone)]
pub struct UpdateEmbedCommand {
    pub guild_id: GuildId,
    pub member: MemberPermissions,
    pub title: String,
    pub description: String,
    pub color: String,
}

pub struct UpdateEmbedHandler {
    store: Arc<dyn SettingsStore>,
    authorize: AuthorizeAdminHandler,
}

impl UpdateEmbedHandler {
    pub fn new(store: Arc<dyn SettingsStore>, authorize: AuthorizeAdminHandler) -> Self {
        Self { store, authorize }
    }

    /// Validates and stores the embed fields, returning the updated settings.
    pub async fn handle(&self, cmd: UpdateEmbedCommand) -> Result<GuildSettings, SettingsError> {
        let mut settings = self
            .authorize
            .handle(AuthorizeAdminQuery {
                guild_id: cmd.guild_id.clone(),
                member: cmd.member,
            })
            .await?;

        let patch = SettingsPatch::embed(cmd.title, cmd.description, cmd.color)?;

        self.store
            .update_settings(&cmd.guild_id, &patch)
            .await
            .map_err(|err| {
                tracing::error!(guild_id = %cmd.guild_id, error = %err, "Embed update failed");
                SettingsError::from(err)
            })?;

        tracing::info!(guild_id = %cmd.guild_id, "Embed settings updated");
        settings.apply(&patch);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::settings::get_settings::tests::MockSettingsStore;
    use crate::application::handlers::settings::GetSettingsHandler;

    fn guild() -> GuildId {
        GuildId::new("guild-1").unwrap()
    }

    fn admin() -> MemberPermissions {
        MemberPermissions {
            administrator: true,
            ..Default::default()
        }
    }

    fn handler(store: Arc<MockSettingsStore>) -> UpdateEmbedHandler {
        let authorize = AuthorizeAdminHandler::new(GetSettingsHandler::new(store.clone()));
        UpdateEmbedHandler::new(store, authorize)
    }

    fn command(member: MemberPermissions, color: &str) -> UpdateEmbedCommand {
        UpdateEmbedCommand {
            guild_id: guild(),
            member,
            title: "Rate us".into(),
            description: "Tell us how we did".into(),
            color: color.into(),
        }
    }

    #[tokio::test]
    async fn admin_updates_all_three_fields() {
        let store = Arc::new(MockSettingsStore::new());
        let settings = handler(store.clone())
            .handle(command(admin(), "#FF0000"))
            .await
            .unwrap();

        assert_eq!(settings.embed_title, "Rate us");
        assert_eq!(settings.embed_color.as_str(), "#FF0000");
        let patches = store.patches();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].embed_description.as_deref(), Some("Tell us how we did"));
    }

    #[tokio::test]
    async fn invalid_color_writes_nothing() {
        let store = Arc::new(MockSettingsStore::new());
        let err = handler(store.clone())
            .handle(command(admin(), "blue"))
            .await
            .unwrap_err();

        assert!(matches!(err, SettingsError::ValidationFailed(ref e) if e.field() == "embed_color"));
        assert!(store.patches().is_empty());
    }

    #[tokio::test]
    async fn non_admin_writes_nothing() {
        let store = Arc::new(MockSettingsStore::new());
        let err = handler(store.clone())
            .handle(command(MemberPermissions::default(), "#FF0000"))
            .await
            .unwrap_err();

        assert_eq!(err, SettingsError::PermissionDenied);
        assert!(store.patches().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let store = Arc::new(MockSettingsStore::failing_writes(GuildSettings::defaults(guild())));
        let err = handler(store).handle(command(admin(), "#abc")).await.unwrap_err();
        assert!(matches!(err, SettingsError::StorageFailure(_)));
    }
}
