//! GetSettingsHandler - Query handler for a guild's review configuration.
//!
//! Read paths never fail on storage errors: the guild gets the default
//! settings and the failure is logged.

use std::sync::Arc;

use crate::domain::foundation::GuildId;
use crate::domain::settings::GuildSettings;
use crate::ports::SettingsStore;

/// Query for one guild's settings.
#[derive(Debug, Clone)]
pub struct GetSettingsQuery {
    pub guild_id: GuildId,
}

/// Handler for reading settings with graceful degradation.
#[derive(Clone)]
pub struct GetSettingsHandler {
    store: Arc<dyn SettingsStore>,
}

impl GetSettingsHandler {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSettingsQuery) -> GuildSettings {
        match self.store.get_settings(&query.guild_id).await {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(
                    guild_id = %query.guild_id,
                    error = %err,
                    "Settings read failed, using defaults"
                );
                GuildSettings::defaults(query.guild_id)
            }
        }
    }
}
