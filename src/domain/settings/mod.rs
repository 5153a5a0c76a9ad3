//! Settings domain module.
//!
//! Per-guild configuration of the review form: embed appearance, the channel
//! that receives announcements, the product catalogue and admin roles.

mod catalog;
mod embed_color;
mod errors;
mod guild_settings;
mod patch;
mod permissions;

pub use catalog::{parse_product_lines, validate_products, MAX_PRODUCTS};
pub use embed_color::{EmbedColor, ADMIN_PANEL_COLOR, DEFAULT_EMBED_COLOR, SUCCESS_COLOR};
pub use errors::SettingsError;
pub use guild_settings::{
    GuildSettings, DEFAULT_EMBED_DESCRIPTION, DEFAULT_EMBED_TITLE, MAX_DESCRIPTION_LENGTH,
    MAX_TITLE_LENGTH,
};
pub use patch::{SettingsField, SettingsPatch};
pub use permissions::{parse_role_list, MemberPermissions, MAX_ADMIN_ROLES};
