//! InteractionRouter - classifies interactions and drives the handlers.
//!
//! Every path ends in a response: domain errors are rendered where they are
//! detected, unknown ids get the generic reply, and a panicking handler is
//! caught and answered the same way.

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::Instrument;

use crate::adapters::presentation::{
    custom_ids, render_admin_panel, render_admin_roles_config_modal, render_admin_roles_updated,
    render_comment_modal, render_complete, render_embed_config_modal, render_embed_updated,
    render_generic_error, render_prompt, render_products_config_modal, render_products_updated,
    render_review_channel_set, render_review_error, render_review_menu, render_settings_error,
};
use crate::application::{
    AuthorizeAdminHandler, AuthorizeAdminQuery, ChooseRatingCommand, ChooseRatingHandler,
    GetSettingsHandler, GetSettingsQuery, ReviewCommitter, SelectProductCommand,
    SelectProductHandler, SessionRegistry, SetReviewChannelCommand, SetReviewChannelHandler,
    StartReviewCommand, StartReviewHandler, SubmitCommentCommand, SubmitCommentHandler,
    UpdateAdminRolesCommand, UpdateAdminRolesHandler, UpdateEmbedCommand, UpdateEmbedHandler,
    UpdateProductsCommand, UpdateProductsHandler,
};
use crate::domain::review::{CommentBounds, ReviewError};
use crate::domain::settings::{parse_role_list, SettingsError};
use crate::ports::SettingsStore;

use super::{ChannelOption, Interaction, InteractionData, InteractionResponse};

/// Routes decoded interactions to the review and settings handlers.
pub struct InteractionRouter {
    settings: GetSettingsHandler,
    authorize_admin: AuthorizeAdminHandler,
    start_review: StartReviewHandler,
    choose_rating: ChooseRatingHandler,
    submit_comment: SubmitCommentHandler,
    select_product: SelectProductHandler,
    update_embed: UpdateEmbedHandler,
    update_products: UpdateProductsHandler,
    set_review_channel: SetReviewChannelHandler,
    update_admin_roles: UpdateAdminRolesHandler,
    comment_bounds: CommentBounds,
}

impl InteractionRouter {
    pub fn new(
        registry: SessionRegistry,
        settings_store: Arc<dyn SettingsStore>,
        committer: ReviewCommitter,
        comment_bounds: CommentBounds,
    ) -> Self {
        let settings = GetSettingsHandler::new(settings_store.clone());
        let authorize_admin = AuthorizeAdminHandler::new(settings.clone());

        Self {
            start_review: StartReviewHandler::new(registry.clone()),
            choose_rating: ChooseRatingHandler::new(registry.clone()),
            submit_comment: SubmitCommentHandler::new(registry.clone(), comment_bounds),
            select_product: SelectProductHandler::new(registry, settings.clone(), committer),
            update_embed: UpdateEmbedHandler::new(settings_store.clone(), authorize_admin.clone()),
            update_products: UpdateProductsHandler::new(
                settings_store.clone(),
                authorize_admin.clone(),
            ),
            set_review_channel: SetReviewChannelHandler::new(
                settings_store.clone(),
                authorize_admin.clone(),
            ),
            update_admin_roles: UpdateAdminRolesHandler::new(settings_store),
            settings,
            authorize_admin,
            comment_bounds,
        }
    }

    /// Handles one interaction. Never fails: errors become ephemeral replies.
    pub async fn dispatch(&self, interaction: Interaction) -> InteractionResponse {
        let span = tracing::info_span!(
            "interaction",
            kind = interaction.data.kind(),
            name = %interaction.data.name(),
            guild_id = %interaction.guild_id,
            user_id = %interaction.user_id,
        );

        async move {
            match AssertUnwindSafe(self.route(interaction)).catch_unwind().await {
                Ok(response) => response,
                Err(_) => {
                    tracing::error!("Interaction handler panicked");
                    InteractionResponse::Reply(render_generic_error())
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn route(&self, interaction: Interaction) -> InteractionResponse {
        let Interaction {
            guild_id,
            user_id,
            display_name,
            member,
            data,
        } = interaction;
        let ctx = Context {
            guild_id,
            user_id,
            display_name,
            member,
        };

        match data {
            InteractionData::Command { name, channel } => {
                self.on_command(ctx, &name, channel).await
            }
            InteractionData::Button { custom_id } => self.on_button(ctx, &custom_id).await,
            InteractionData::SelectMenu { custom_id, values } => {
                self.on_select(ctx, &custom_id, &values).await
            }
            InteractionData::ModalSubmit { custom_id, fields } => {
                self.on_modal(ctx, &custom_id, fields).await
            }
        }
    }

    async fn on_command(
        &self,
        ctx: Context,
        name: &str,
        channel: Option<ChannelOption>,
    ) -> InteractionResponse {
        match name {
            custom_ids::REVIEW_MENU_COMMAND => {
                let settings = self.load_settings(&ctx).await;
                let session = self
                    .start_review
                    .handle(StartReviewCommand {
                        guild_id: ctx.guild_id,
                        user_id: ctx.user_id,
                        display_name: ctx.display_name,
                    })
                    .await;
                InteractionResponse::Reply(render_review_menu(&settings, session.updated_at()))
            }
            custom_ids::SET_REVIEW_CHANNEL_COMMAND => {
                let Some(channel) = channel else {
                    return unknown(name);
                };
                let result = self
                    .set_review_channel
                    .handle(SetReviewChannelCommand {
                        guild_id: ctx.guild_id,
                        member: ctx.member,
                        channel_id: channel.id,
                        text_based: channel.text_based,
                    })
                    .await;
                settings_reply(result.map(|channel_id| render_review_channel_set(&channel_id)))
            }
            custom_ids::ADMIN_CONFIG_COMMAND => {
                let result = self
                    .authorize_admin
                    .handle(AuthorizeAdminQuery {
                        guild_id: ctx.guild_id,
                        member: ctx.member,
                    })
                    .await;
                settings_reply(result.map(|_| render_admin_panel()))
            }
            _ => unknown(name),
        }
    }

    async fn on_button(&self, ctx: Context, custom_id: &str) -> InteractionResponse {
        if let Some(stars) = custom_ids::parse_rating_id(custom_id) {
            let settings = self.load_settings(&ctx).await;
            let result = self
                .choose_rating
                .handle(ChooseRatingCommand {
                    guild_id: ctx.guild_id,
                    user_id: ctx.user_id,
                    display_name: ctx.display_name,
                    stars,
                })
                .await;
            // The menu is shared, so each user continues in a private message.
            return match result {
                Ok(session) => {
                    InteractionResponse::Reply(render_prompt(&session, &settings).ephemeral())
                }
                Err(err) => review_error(err),
            };
        }

        match custom_id {
            custom_ids::LEAVE_COMMENT => {
                InteractionResponse::Modal(render_comment_modal(self.comment_bounds))
            }
            custom_ids::CONFIG_EMBED | custom_ids::CONFIG_PRODUCTS => {
                let result = self
                    .authorize_admin
                    .handle(AuthorizeAdminQuery {
                        guild_id: ctx.guild_id,
                        member: ctx.member,
                    })
                    .await;
                match result {
                    Ok(settings) if custom_id == custom_ids::CONFIG_EMBED => {
                        InteractionResponse::Modal(render_embed_config_modal(&settings))
                    }
                    Ok(settings) => {
                        InteractionResponse::Modal(render_products_config_modal(&settings))
                    }
                    Err(err) => settings_error(err),
                }
            }
            // Only native admins may change who else counts as one.
            custom_ids::CONFIG_ADMIN_ROLES => {
                if !ctx.member.has_native_admin() {
                    return settings_error(SettingsError::PermissionDenied);
                }
                let settings = self.load_settings(&ctx).await;
                InteractionResponse::Modal(render_admin_roles_config_modal(&settings))
            }
            _ => unknown(custom_id),
        }
    }

    async fn on_select(
        &self,
        ctx: Context,
        custom_id: &str,
        values: &[String],
    ) -> InteractionResponse {
        if custom_id != custom_ids::SELECT_PRODUCT {
            return unknown(custom_id);
        }

        let Some(catalog_index) = values
            .first()
            .and_then(|value| custom_ids::parse_product_value(value))
        else {
            return review_error(ReviewError::validation(
                "catalog_index",
                "unrecognised product selection",
            ));
        };

        let result = self
            .select_product
            .handle(SelectProductCommand {
                guild_id: ctx.guild_id,
                user_id: ctx.user_id,
                catalog_index,
            })
            .await;

        match result {
            Ok(outcome) => {
                InteractionResponse::Update(render_complete(&outcome.review, &outcome.settings))
            }
            Err(err) => review_error(err),
        }
    }

    async fn on_modal(
        &self,
        ctx: Context,
        custom_id: &str,
        mut fields: HashMap<String, String>,
    ) -> InteractionResponse {
        let mut field = |name: &str| fields.remove(name).unwrap_or_default();

        match custom_id {
            custom_ids::COMMENT_MODAL => {
                let text = field(custom_ids::COMMENT_TEXT);
                let settings = self.load_settings(&ctx).await;
                let result = self
                    .submit_comment
                    .handle(SubmitCommentCommand {
                        guild_id: ctx.guild_id,
                        user_id: ctx.user_id,
                        text,
                    })
                    .await;
                match result {
                    Ok(session) => {
                        InteractionResponse::Update(render_prompt(&session, &settings))
                    }
                    Err(err) => review_error(err),
                }
            }
            custom_ids::EMBED_CONFIG_MODAL => {
                let command = UpdateEmbedCommand {
                    title: field(custom_ids::EMBED_TITLE_INPUT),
                    description: field(custom_ids::EMBED_DESCRIPTION_INPUT),
                    color: field(custom_ids::EMBED_COLOR_INPUT),
                    guild_id: ctx.guild_id,
                    member: ctx.member,
                };
                let result = self.update_embed.handle(command).await;
                settings_reply(result.map(|_| render_embed_updated()))
            }
            custom_ids::PRODUCTS_CONFIG_MODAL => {
                let command = UpdateProductsCommand {
                    products_text: field(custom_ids::PRODUCTS_LIST_INPUT),
                    guild_id: ctx.guild_id,
                    member: ctx.member,
                };
                let result = self.update_products.handle(command).await;
                settings_reply(result.map(|products| render_products_updated(products.len())))
            }
            custom_ids::ADMIN_ROLES_CONFIG_MODAL => {
                let role_ids = match parse_role_list(&field(custom_ids::ADMIN_ROLES_LIST_INPUT)) {
                    Ok(role_ids) => role_ids,
                    Err(err) => return settings_error(SettingsError::from(err)),
                };
                let command = UpdateAdminRolesCommand {
                    guild_id: ctx.guild_id,
                    member: ctx.member,
                    role_ids,
                };
                let result = self.update_admin_roles.handle(command).await;
                settings_reply(result.map(|roles| render_admin_roles_updated(&roles)))
            }
            _ => unknown(custom_id),
        }
    }

    async fn load_settings(&self, ctx: &Context) -> crate::domain::settings::GuildSettings {
        self.settings
            .handle(GetSettingsQuery {
                guild_id: ctx.guild_id.clone(),
            })
            .await
    }
}

/// Who is acting, where.
struct Context {
    guild_id: crate::domain::foundation::GuildId,
    user_id: crate::domain::foundation::UserId,
    display_name: String,
    member: crate::domain::settings::MemberPermissions,
}

fn review_error(err: ReviewError) -> InteractionResponse {
    match &err {
        ReviewError::StorageFailure(_) => tracing::error!(error = %err, "Review step failed"),
        _ => tracing::info!(code = %err.code(), "Review step rejected"),
    }
    InteractionResponse::Reply(render_review_error(&err))
}

fn settings_error(err: SettingsError) -> InteractionResponse {
    tracing::info!(code = %err.code(), "Settings action rejected");
    InteractionResponse::Reply(render_settings_error(&err))
}

fn settings_reply(
    result: Result<crate::adapters::presentation::MessageView, SettingsError>,
) -> InteractionResponse {
    match result {
        Ok(message) => InteractionResponse::Reply(message),
        Err(err) => settings_error(err),
    }
}

fn unknown(name: &str) -> InteractionResponse {
    tracing::warn!(name, "Unhandled interaction");
    InteractionResponse::Reply(render_generic_error())
}
