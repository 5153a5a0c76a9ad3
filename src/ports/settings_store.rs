//! Settings store port.
//!
//! Per-guild configuration, one row per guild. Rows are created lazily with
//! defaults and updated by partial upsert; they are never deleted.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GuildId};
use crate::domain::settings::{GuildSettings, SettingsPatch};

/// Port for reading and updating guild settings.
///
/// Implementations must ensure:
/// - `get_settings` never fails just because a guild has no row yet; it
///   returns (and may persist) `GuildSettings::defaults`
/// - `update_settings` writes only the columns present in the patch and
///   never derives column names from caller input
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load settings for a guild, creating the default row if missing.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn get_settings(&self, guild_id: &GuildId) -> Result<GuildSettings, DomainError>;

    /// Upsert the fields present in `patch`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn update_settings(
        &self,
        guild_id: &GuildId,
        patch: &SettingsPatch,
    ) -> Result<(), DomainError>;
}
