//! AuthorizeAdminHandler - gate for every settings surface.

use crate::domain::foundation::GuildId;
use crate::domain::settings::{GuildSettings, MemberPermissions, SettingsError};

use super::{GetSettingsHandler, GetSettingsQuery};

/// Query: may this member configure the review system in this guild?
#[derive(Debug, Clone)]
pub struct AuthorizeAdminQuery {
    pub guild_id: GuildId,
    pub member: MemberPermissions,
}

/// Checks the admin predicate against the guild's current settings.
#[derive(Clone)]
pub struct AuthorizeAdminHandler {
    settings: GetSettingsHandler,
}

impl AuthorizeAdminHandler {
    pub fn new(settings: GetSettingsHandler) -> Self {
        Self { settings }
    }

    /// Returns the guild's settings when the member is an admin.
    ///
    /// Settings that cannot be read count as "no configured admin roles".
    pub async fn handle(&self, query: AuthorizeAdminQuery) -> Result<GuildSettings, SettingsError> {
        let settings = self
            .settings
            .handle(GetSettingsQuery {
                guild_id: query.guild_id.clone(),
            })
            .await;

        if !query.member.is_review_admin(&settings) {
            tracing::info!(guild_id = %query.guild_id, "Admin action denied");
            return Err(SettingsError::PermissionDenied);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::settings::get_settings::tests::MockSettingsStore;
    use crate::domain::foundation::RoleId;
    use std::sync::Arc;

    fn guild() -> GuildId {
        GuildId::new("guild-1").unwrap()
    }

    fn handler(store: MockSettingsStore) -> AuthorizeAdminHandler {
        AuthorizeAdminHandler::new(GetSettingsHandler::new(Arc::new(store)))
    }

    fn member_with_role(role: &str) -> MemberPermissions {
        MemberPermissions {
            role_ids: vec![RoleId::new(role).unwrap()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn native_admin_is_allowed() {
        let member = MemberPermissions {
            manage_guild: true,
            ..Default::default()
        };
        let result = handler(MockSettingsStore::new())
            .handle(AuthorizeAdminQuery { guild_id: guild(), member })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn configured_role_is_allowed() {
        let mut settings = GuildSettings::defaults(guild());
        settings.admin_roles = vec![RoleId::new("mods").unwrap()];

        let result = handler(MockSettingsStore::with_settings(settings))
            .handle(AuthorizeAdminQuery {
                guild_id: guild(),
                member: member_with_role("mods"),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn plain_member_is_denied() {
        let result = handler(MockSettingsStore::new())
            .handle(AuthorizeAdminQuery {
                guild_id: guild(),
                member: member_with_role("everyone"),
            })
            .await;
        assert_eq!(result.unwrap_err(), SettingsError::PermissionDenied);
    }

    #[tokio::test]
    async fn unreadable_settings_fall_back_to_native_flags_only() {
        let result = handler(MockSettingsStore::failing_reads())
            .handle(AuthorizeAdminQuery {
                guild_id: guild(),
                member: member_with_role("mods"),
            })
            .await;
        assert_eq!(result.unwrap_err(), SettingsError::PermissionDenied);
    }
}
