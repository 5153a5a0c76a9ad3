//! Admin surfaces: config panel, configuration modals and confirmations.

use crate::domain::foundation::{ChannelId, RoleId};
use crate::domain::settings::{
    EmbedColor, GuildSettings, DEFAULT_EMBED_COLOR, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
};

use super::custom_ids::{
    ADMIN_ROLES_CONFIG_MODAL, ADMIN_ROLES_LIST_INPUT, CONFIG_ADMIN_ROLES, CONFIG_EMBED,
    CONFIG_PRODUCTS, EMBED_COLOR_INPUT, EMBED_CONFIG_MODAL, EMBED_DESCRIPTION_INPUT,
    EMBED_TITLE_INPUT, PRODUCTS_CONFIG_MODAL, PRODUCTS_LIST_INPUT,
};
use super::views::{
    ActionRowView, ButtonStyle, ComponentView, EmbedView, MessageView, ModalView,
    TextInputStyle, TextInputView,
};

/// Longest catalogue text the products form accepts.
pub const MAX_PRODUCTS_TEXT_LENGTH: usize = 2000;

/// Longest `#rrggbb` value.
const MAX_COLOR_LENGTH: usize = 7;

/// Longest admin-role text the form accepts.
const MAX_ADMIN_ROLES_TEXT_LENGTH: usize = 1000;

pub fn render_admin_panel() -> MessageView {
    let embed = EmbedView::new(&EmbedColor::admin_panel())
        .with_title("Admin Configuration")
        .with_description("Click the buttons below to configure the review system.");
    let row = ActionRowView::new(vec![
        ComponentView::button(CONFIG_EMBED, "Embed Settings", ButtonStyle::Primary),
        ComponentView::button(CONFIG_PRODUCTS, "Manage Products", ButtonStyle::Secondary),
        ComponentView::button(CONFIG_ADMIN_ROLES, "Admin Roles", ButtonStyle::Danger),
    ]);
    MessageView::embed(embed, vec![row]).ephemeral()
}

/// Embed form prefilled with the guild's current values.
pub fn render_embed_config_modal(settings: &GuildSettings) -> ModalView {
    ModalView::new(
        EMBED_CONFIG_MODAL,
        "Configure Embed Settings",
        vec![
            TextInputView::new(EMBED_TITLE_INPUT, "Embed Title", TextInputStyle::Short)
                .with_length(None, MAX_TITLE_LENGTH)
                .with_value(settings.embed_title.clone()),
            TextInputView::new(
                EMBED_DESCRIPTION_INPUT,
                "Embed Description",
                TextInputStyle::Paragraph,
            )
            .with_length(None, MAX_DESCRIPTION_LENGTH)
            .with_value(settings.embed_description.clone()),
            TextInputView::new(EMBED_COLOR_INPUT, "Embed Color (Hex)", TextInputStyle::Short)
                .with_length(None, MAX_COLOR_LENGTH)
                .with_value(settings.embed_color.as_str())
                .with_placeholder(DEFAULT_EMBED_COLOR),
        ],
    )
}

/// Catalogue form, one product per line.
pub fn render_products_config_modal(settings: &GuildSettings) -> ModalView {
    let mut input = TextInputView::new(
        PRODUCTS_LIST_INPUT,
        "Products/Items (one per line)",
        TextInputStyle::Paragraph,
    )
    .with_length(None, MAX_PRODUCTS_TEXT_LENGTH)
    .with_placeholder("Product 1\nProduct 2\nProduct 3");
    if settings.has_products() {
        input = input.with_value(settings.products.join("\n"));
    }
    ModalView::new(PRODUCTS_CONFIG_MODAL, "Configure Products/Items", vec![input])
}

/// Admin-role form, one role id or mention per line.
pub fn render_admin_roles_config_modal(settings: &GuildSettings) -> ModalView {
    let mut input = TextInputView::new(
        ADMIN_ROLES_LIST_INPUT,
        "Admin role ids or mentions (one per line)",
        TextInputStyle::Paragraph,
    )
    .with_length(None, MAX_ADMIN_ROLES_TEXT_LENGTH)
    .with_placeholder("123456789012345678");
    if !settings.admin_roles.is_empty() {
        let lines: Vec<&str> = settings.admin_roles.iter().map(|role| role.as_str()).collect();
        input = input.with_value(lines.join("\n"));
    }
    ModalView::new(ADMIN_ROLES_CONFIG_MODAL, "Configure Admin Roles", vec![input])
}

pub fn render_embed_updated() -> MessageView {
    MessageView::ephemeral_text("Embed settings have been updated successfully!")
}

pub fn render_products_updated(count: usize) -> MessageView {
    MessageView::ephemeral_text(format!(
        "Successfully updated product list with {} items!",
        count
    ))
}

pub fn render_admin_roles_updated(roles: &[RoleId]) -> MessageView {
    if roles.is_empty() {
        return MessageView::ephemeral_text(
            "Admin roles cleared. Only server administrators can configure reviews.",
        );
    }
    let mentions: Vec<String> = roles.iter().map(|role| format!("<@&{}>", role)).collect();
    MessageView::ephemeral_text(format!("Admin roles updated: {}", mentions.join(", ")))
}

pub fn render_review_channel_set(channel_id: &ChannelId) -> MessageView {
    MessageView::ephemeral_text(format!("Review channel has been set to <#{}>", channel_id))
}
