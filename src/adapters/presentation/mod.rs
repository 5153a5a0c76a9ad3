//! Presentation adapter - renders review flow state into platform UI.
//!
//! Stateless: every function maps domain values to message, modal or
//! component descriptors that serialize in the platform's JSON shape.

mod admin_views;
mod commands;
pub mod custom_ids;
mod errors;
mod review_views;
mod views;

pub use admin_views::{
    render_admin_panel, render_admin_roles_config_modal, render_admin_roles_updated,
    render_embed_config_modal, render_embed_updated, render_products_config_modal,
    render_products_updated, render_review_channel_set, MAX_PRODUCTS_TEXT_LENGTH,
};
pub use commands::{command_definitions, CommandDefinition, CommandOption};
pub use errors::{
    render_generic_error, render_review_error, render_settings_error, GENERIC_ERROR,
    PERMISSION_DENIED, SESSION_EXPIRED, SUBMIT_FAILED,
};
pub use review_views::{
    render_announcement, render_comment_modal, render_complete, render_prompt,
    render_review_menu, ANNOUNCEMENT_TITLE,
};
pub use views::{
    ActionRowView, ButtonStyle, ButtonView, ComponentView, EmbedFooter, EmbedView, MessageView,
    ModalView, SelectMenuView, SelectOptionView, TextInputStyle, TextInputView, EPHEMERAL_FLAG,
};
