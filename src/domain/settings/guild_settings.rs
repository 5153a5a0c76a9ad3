//! Per-guild configuration of the review form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChannelId, GuildId, RoleId};

use super::{EmbedColor, SettingsPatch};

pub const DEFAULT_EMBED_TITLE: &str = "Review System";
pub const DEFAULT_EMBED_DESCRIPTION: &str = "Please complete all steps to submit your review.";

/// Longest embed title the platform accepts.
pub const MAX_TITLE_LENGTH: usize = 256;

/// Longest embed description accepted from the config form.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Review form configuration for one guild.
///
/// Created lazily with defaults on first access; updated only through
/// `SettingsPatch`; never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSettings {
    pub guild_id: GuildId,
    pub embed_color: EmbedColor,
    pub embed_title: String,
    pub embed_description: String,
    pub review_channel_id: Option<ChannelId>,
    pub products: Vec<String>,
    pub admin_roles: Vec<RoleId>,
}

impl GuildSettings {
    /// Settings for a guild that has never been configured.
    pub fn defaults(guild_id: GuildId) -> Self {
        Self {
            guild_id,
            embed_color: EmbedColor::default(),
            embed_title: DEFAULT_EMBED_TITLE.to_string(),
            embed_description: DEFAULT_EMBED_DESCRIPTION.to_string(),
            review_channel_id: None,
            products: Vec::new(),
            admin_roles: Vec::new(),
        }
    }

    /// Catalogue entry at `index`, if any.
    pub fn product(&self, index: usize) -> Option<&str> {
        self.products.get(index).map(String::as_str)
    }

    pub fn has_products(&self) -> bool {
        !self.products.is_empty()
    }

    /// Applies the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(title) = &patch.embed_title {
            self.embed_title = title.clone();
        }
        if let Some(description) = &patch.embed_description {
            self.embed_description = description.clone();
        }
        if let Some(color) = &patch.embed_color {
            self.embed_color = color.clone();
        }
        if let Some(products) = &patch.products {
            self.products = products.clone();
        }
        if let Some(channel) = &patch.review_channel_id {
            self.review_channel_id = Some(channel.clone());
        }
        if let Some(roles) = &patch.admin_roles {
            self.admin_roles = roles.clone();
        }
    }
}
