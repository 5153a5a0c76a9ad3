//! PostgreSQL implementation of SettingsStore.
//!
//! One row per guild in `settings`. Products and admin roles are stored as
//! JSON text arrays. Updates are a single parameterized upsert; the column
//! list is fixed in the statement and never built from input.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{ChannelId, DomainError, ErrorCode, GuildId, RoleId};
use crate::domain::settings::{EmbedColor, GuildSettings, SettingsPatch};
use crate::ports::SettingsStore;

/// PostgreSQL implementation of the SettingsStore port.
pub struct PostgresSettingsStore {
    pool: PgPool,
}

impl PostgresSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of guild settings.
#[derive(Debug, sqlx::FromRow)]
struct SettingsRow {
    guild_id: String,
    embed_color: String,
    embed_title: String,
    embed_description: String,
    review_channel_id: Option<String>,
    products: String,
    admin_roles: String,
}

impl TryFrom<SettingsRow> for GuildSettings {
    type Error = DomainError;

    fn try_from(row: SettingsRow) -> Result<Self, Self::Error> {
        let products: Vec<String> = serde_json::from_str(&row.products)
            .map_err(|e| DomainError::database("Invalid products column", e))?;
        let admin_roles: Vec<RoleId> = serde_json::from_str(&row.admin_roles)
            .map_err(|e| DomainError::database("Invalid admin_roles column", e))?;

        Ok(GuildSettings {
            guild_id: GuildId::new(row.guild_id)
                .map_err(|e| DomainError::database("Invalid guild_id", e))?,
            embed_color: EmbedColor::new(row.embed_color)
                .map_err(|e| DomainError::database("Invalid embed_color", e))?,
            embed_title: row.embed_title,
            embed_description: row.embed_description,
            review_channel_id: row
                .review_channel_id
                .filter(|id| !id.trim().is_empty())
                .map(ChannelId::new)
                .transpose()
                .map_err(|e| DomainError::database("Invalid review_channel_id", e))?,
            products,
            admin_roles,
        })
    }
}

fn to_json<T: serde::Serialize>(column: &str, value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value).map_err(|e| {
        DomainError::new(ErrorCode::InternalError, format!("Failed to encode {}: {}", column, e))
    })
}

#[async_trait]
impl SettingsStore for PostgresSettingsStore {
    async fn get_settings(&self, guild_id: &GuildId) -> Result<GuildSettings, DomainError> {
        sqlx::query("INSERT INTO settings (guild_id) VALUES ($1) ON CONFLICT (guild_id) DO NOTHING")
            .bind(guild_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to create settings", e))?;

        let row: SettingsRow = sqlx::query_as(
            r#"
            SELECT guild_id, embed_color, embed_title, embed_description,
                   review_channel_id, products, admin_roles
            FROM settings
            WHERE guild_id = $1
            "#,
        )
        .bind(guild_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load settings", e))?;

        GuildSettings::try_from(row)
    }

    async fn update_settings(
        &self,
        guild_id: &GuildId,
        patch: &SettingsPatch,
    ) -> Result<(), DomainError> {
        if patch.is_empty() {
            return Ok(());
        }

        // Row values if the guild has no row yet.
        let mut inserted = GuildSettings::defaults(guild_id.clone());
        inserted.apply(patch);

        let products = patch
            .products
            .as_ref()
            .map(|p| to_json("products", p))
            .transpose()?;
        let admin_roles = patch
            .admin_roles
            .as_ref()
            .map(|r| to_json("admin_roles", r))
            .transpose()?;

        sqlx::query(
            r#"
            INSERT INTO settings (
                guild_id, embed_title, embed_description, embed_color,
                products, review_channel_id, admin_roles
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (guild_id) DO UPDATE SET
                embed_title = COALESCE($8, settings.embed_title),
                embed_description = COALESCE($9, settings.embed_description),
                embed_color = COALESCE($10, settings.embed_color),
                products = COALESCE($11, settings.products),
                review_channel_id = COALESCE($12, settings.review_channel_id),
                admin_roles = COALESCE($13, settings.admin_roles),
                updated_at = NOW()
            "#,
        )
        .bind(guild_id.as_str())
        .bind(&inserted.embed_title)
        .bind(&inserted.embed_description)
        .bind(inserted.embed_color.as_str())
        .bind(to_json("products", &inserted.products)?)
        .bind(inserted.review_channel_id.as_ref().map(|c| c.as_str()))
        .bind(to_json("admin_roles", &inserted.admin_roles)?)
        .bind(patch.embed_title.as_deref())
        .bind(patch.embed_description.as_deref())
        .bind(patch.embed_color.as_ref().map(|c| c.as_str()))
        .bind(products)
        .bind(patch.review_channel_id.as_ref().map(|c| c.as_str()))
        .bind(admin_roles)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update settings", e))?;

        tracing::debug!(
            guild_id = %guild_id,
            fields = ?patch.fields(),
            "Settings upserted"
        );
        Ok(())
    }
}
