//! UpdateAdminRolesHandler - replaces the guild's configured admin roles.
//!
//! Only platform-native admins may do this; a configured admin role cannot
//! widen its own circle.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::foundation::{GuildId, RoleId};
use crate::domain::settings::{MemberPermissions, SettingsError, SettingsPatch};
use crate::ports::SettingsStore;

#[derive(Debug, Clone)]
pub struct UpdateAdminRolesCommand {
    pub guild_id: GuildId,
    pub member: MemberPermissions,
    pub role_ids: Vec<RoleId>,
}

pub struct UpdateAdminRolesHandler {
    store: Arc<dyn SettingsStore>,
}

impl UpdateAdminRolesHandler {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateAdminRolesCommand) -> Result<Vec<RoleId>, SettingsError> {
        if !cmd.member.has_native_admin() {
            tracing::info!(guild_id = %cmd.guild_id, "Admin role update denied");
            return Err(SettingsError::PermissionDenied);
        }

        let mut seen = HashSet::new();
        let role_ids: Vec<RoleId> = cmd
            .role_ids
            .into_iter()
            .filter(|role| seen.insert(role.clone()))
            .collect();
        let patch = SettingsPatch::admin_roles(role_ids.clone());

        self.store
            .update_settings(&cmd.guild_id, &patch)
            .await
            .map_err(|err| {
                tracing::error!(guild_id = %cmd.guild_id, error = %err, "Admin role update failed");
                SettingsError::from(err)
            })?;

        tracing::info!(guild_id = %cmd.guild_id, count = role_ids.len(), "Admin roles updated");
        Ok(role_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::settings::get_settings::tests::MockSettingsStore;

    fn roles(ids: &[&str]) -> Vec<RoleId> {
        ids.iter().map(|id| RoleId::new(*id).unwrap()).collect()
    }

    #[tokio::test]
    async fn native_admin_replaces_roles() {
        let store = Arc::new(MockSettingsStore::new());
        let handler = UpdateAdminRolesHandler::new(store.clone());

        let stored = handler
            .handle(UpdateAdminRolesCommand {
                guild_id: GuildId::new("guild-1").unwrap(),
                member: MemberPermissions {
                    administrator: true,
                    ..Default::default()
                },
                role_ids: roles(&["mods", "mods", "staff"]),
            })
            .await
            .unwrap();

        assert_eq!(stored, roles(&["mods", "staff"]));
        assert_eq!(store.patches()[0].admin_roles, Some(roles(&["mods", "staff"])));
    }

    #[tokio::test]
    async fn configured_admin_role_cannot_change_roles() {
        let store = Arc::new(MockSettingsStore::new());
        let handler = UpdateAdminRolesHandler::new(store.clone());

        let err = handler
            .handle(UpdateAdminRolesCommand {
                guild_id: GuildId::new("guild-1").unwrap(),
                member: MemberPermissions {
                    role_ids: roles(&["mods"]),
                    ..Default::default()
                },
                role_ids: roles(&["mods", "friends"]),
            })
            .await
            .unwrap_err();

        assert_eq!(err, SettingsError::PermissionDenied);
        assert!(store.patches().is_empty());
    }
}
