//! SetReviewChannelHandler - Command handler for `/setreviewchannel`.

use std::sync::Arc;

use crate::domain::foundation::{ChannelId, GuildId};
use crate::domain::settings::{MemberPermissions, SettingsError, SettingsPatch};
use crate::ports::SettingsStore;

use super::{AuthorizeAdminHandler, AuthorizeAdminQuery};

/// Command to route review announcements to a channel.
#[derive(Debug, Clone)]
pub struct SetReviewChannelCommand {
    pub guild_id: GuildId,
    pub member: MemberPermissions,
    pub channel_id: ChannelId,
    /// Whether the platform reports the channel as text-based.
    pub text_based: bool,
}

pub struct SetReviewChannelHandler {
    store: Arc<dyn SettingsStore>,
    authorize: AuthorizeAdminHandler,
}

impl SetReviewChannelHandler {
    pub fn new(store: Arc<dyn SettingsStore>, authorize: AuthorizeAdminHandler) -> Self {
        Self { store, authorize }
    }

    pub async fn handle(&self, cmd: SetReviewChannelCommand) -> Result<ChannelId, SettingsError> {
        self.authorize
            .handle(AuthorizeAdminQuery {
                guild_id: cmd.guild_id.clone(),
                member: cmd.member,
            })
            .await?;

        if !cmd.text_based {
            return Err(SettingsError::NotTextChannel);
        }

        let patch = SettingsPatch::review_channel(cmd.channel_id.clone());
        self.store
            .update_settings(&cmd.guild_id, &patch)
            .await
            .map_err(|err| {
                tracing::error!(guild_id = %cmd.guild_id, error = %err, "Review channel update failed");
                SettingsError::from(err)
            })?;

        tracing::info!(guild_id = %cmd.guild_id, channel_id = %cmd.channel_id, "Review channel set");
        Ok(cmd.channel_id)
    }
}
