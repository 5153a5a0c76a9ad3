//! In-Memory Settings Store Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, GuildId};
use crate::domain::settings::{GuildSettings, SettingsPatch};
use crate::ports::SettingsStore;

/// In-memory settings rows keyed by guild.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    rows: Arc<RwLock<HashMap<GuildId, GuildSettings>>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of guilds with a stored row.
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_settings(&self, guild_id: &GuildId) -> Result<GuildSettings, DomainError> {
        if let Some(settings) = self.rows.read().await.get(guild_id) {
            return Ok(settings.clone());
        }

        let mut rows = self.rows.write().await;
        let settings = rows
            .entry(guild_id.clone())
            .or_insert_with(|| GuildSettings::defaults(guild_id.clone()));
        Ok(settings.clone())
    }

    async fn update_settings(
        &self,
        guild_id: &GuildId,
        patch: &SettingsPatch,
    ) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        rows.entry(guild_id.clone())
            .or_insert_with(|| GuildSettings::defaults(guild_id.clone()))
            .apply(patch);
        Ok(())
    }
}
