//! Review flow rendering: one prompt per step, the completion card and the
//! channel announcement.

use crate::domain::foundation::Timestamp;
use crate::domain::review::{
    Comment, CommentBounds, Rating, Review, ReviewSession, ReviewStep, INPUT_STEPS, MAX_STARS,
};
use crate::domain::settings::{EmbedColor, GuildSettings, MAX_PRODUCTS};

use super::custom_ids::{
    product_value, rating_id, COMMENT_MODAL, COMMENT_TEXT, LEAVE_COMMENT, NO_PRODUCTS,
    SELECT_PRODUCT,
};
use super::views::{
    ActionRowView, ButtonStyle, ComponentView, EmbedView, MessageView, ModalView,
    SelectOptionView, TextInputStyle, TextInputView,
};

pub const ANNOUNCEMENT_TITLE: &str = "New Review Submitted";

/// The public review menu opened by `/reviewmenu`.
pub fn render_review_menu(settings: &GuildSettings, at: &Timestamp) -> MessageView {
    let description = format!(
        "{}\n\n{} Please select your rating\n\nHow would you rate your experience?",
        settings.embed_description,
        step_header(ReviewStep::Rating)
    );
    MessageView::embed(form_embed(settings, at).with_description(description), vec![rating_row()])
}

/// Prompt for the step `session` is waiting on.
pub fn render_prompt(session: &ReviewSession, settings: &GuildSettings) -> MessageView {
    let at = session.updated_at();
    match session.step() {
        ReviewStep::Rating => render_review_menu(settings, at),
        ReviewStep::Comment => {
            let description = format!(
                "{} Leave your comment\n\n{}\n\nPlease click the button below to leave your detailed comment.",
                step_header(ReviewStep::Comment),
                rating_line(session.rating()),
            );
            MessageView::embed(
                form_embed(settings, at).with_description(description),
                vec![ActionRowView::new(vec![ComponentView::button(
                    LEAVE_COMMENT,
                    "💬 Leave Comment",
                    ButtonStyle::Primary,
                )])],
            )
        }
        ReviewStep::Product => {
            let preview = session.comment().map(Comment::preview).unwrap_or_default();
            let description = format!(
                "{} Select the product/item\n\n{}\n💬 **Comment:** {}\n\nPlease select the product/item you purchased.",
                step_header(ReviewStep::Product),
                rating_line(session.rating()),
                preview,
            );
            MessageView::embed(
                form_embed(settings, at).with_description(description),
                vec![product_row(&settings.products)],
            )
        }
        ReviewStep::Complete => MessageView::embed(
            complete_embed(
                session.rating(),
                session.comment().map(Comment::as_str).unwrap_or_default(),
                session.product().unwrap_or_default(),
                settings,
                at,
            ),
            Vec::new(),
        ),
    }
}

/// Completion card shown to the reviewer after the commit.
pub fn render_complete(review: &Review, settings: &GuildSettings) -> MessageView {
    MessageView::embed(
        complete_embed(
            Some(review.rating),
            review.comment.as_str(),
            &review.product,
            settings,
            &review.created_at,
        ),
        Vec::new(),
    )
}

pub fn render_comment_modal(bounds: CommentBounds) -> ModalView {
    ModalView::new(
        COMMENT_MODAL,
        "Leave Your Comment",
        vec![
            TextInputView::new(COMMENT_TEXT, "Your detailed comment", TextInputStyle::Paragraph)
                .with_length(Some(bounds.min), bounds.max)
                .with_placeholder("Please share your detailed experience..."),
        ],
    )
}

/// Announcement posted to the guild's review channel.
pub fn render_announcement(review: &Review, settings: &GuildSettings) -> MessageView {
    let description = format!(
        "**Customer:** {}\n**Rating:** {} ({}/5)\n**Product:** {}\n**Comment:** {}",
        review.user_name,
        review.rating.star_bar(),
        review.rating.value(),
        review.product,
        review.comment.as_str(),
    );
    MessageView::embed(
        EmbedView::new(&settings.embed_color)
            .with_title(ANNOUNCEMENT_TITLE)
            .with_description(description)
            .with_footer(format!("Review ID: {}", review.id))
            .with_timestamp(&review.created_at),
        Vec::new(),
    )
}

fn form_embed(settings: &GuildSettings, at: &Timestamp) -> EmbedView {
    EmbedView::new(&settings.embed_color)
        .with_title(settings.embed_title.clone())
        .with_timestamp(at)
}

fn complete_embed(
    rating: Option<Rating>,
    comment: &str,
    product: &str,
    settings: &GuildSettings,
    at: &Timestamp,
) -> EmbedView {
    let description = format!(
        "✅ **Review Complete!**\n\n{}\n💬 **Comment:** {}\n📦 **Product:** {}\n\nThank you for your review! It has been submitted.",
        rating_line(rating),
        comment,
        product,
    );
    EmbedView::new(&EmbedColor::success())
        .with_title(settings.embed_title.clone())
        .with_description(description)
        .with_timestamp(at)
}

fn step_header(step: ReviewStep) -> String {
    format!("**Step {} of {}:**", step.number(), INPUT_STEPS)
}

fn rating_line(rating: Option<Rating>) -> String {
    let label = rating.map(|r| r.label()).unwrap_or_default();
    format!("★ **Rating:** {}", label)
}

fn rating_row() -> ActionRowView {
    ActionRowView::new(
        Rating::all()
            .map(|rating| {
                let style = if rating.value() == MAX_STARS {
                    ButtonStyle::Primary
                } else {
                    ButtonStyle::Secondary
                };
                ComponentView::button(&rating_id(rating.value()), &rating_button_label(rating), style)
            })
            .collect(),
    )
}

fn product_row(products: &[String]) -> ActionRowView {
    if products.is_empty() {
        return ActionRowView::new(vec![ComponentView::disabled_button(
            NO_PRODUCTS,
            "No Products Configured",
            ButtonStyle::Secondary,
        )]);
    }

    let options = products
        .iter()
        .take(MAX_PRODUCTS)
        .enumerate()
        .map(|(index, product)| SelectOptionView {
            label: product.clone(),
            value: product_value(index),
            description: Some(format!("Select {}", product)),
        })
        .collect();
    ActionRowView::new(vec![ComponentView::select_menu(
        SELECT_PRODUCT,
        "Choose a product/item",
        options,
    )])
}

fn rating_button_label(rating: Rating) -> String {
    let suffix = if rating.value() == 1 { "" } else { "s" };
    format!("{} Star{}", rating.value(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{GuildId, ReviewId, UserId};
    use crate::domain::review::SessionKey;

    fn settings(products: &[&str]) -> GuildSettings {
        let mut settings = GuildSettings::defaults(GuildId::new("guild-1").unwrap());
        settings.products = products.iter().map(|p| p.to_string()).collect();
        settings
    }

    fn session_at(step: ReviewStep) -> ReviewSession {
        let key = SessionKey::new(GuildId::new("guild-1").unwrap(), UserId::new("u1").unwrap());
        let mut session = ReviewSession::new(key, "Alice");
        if step >= ReviewStep::Comment {
            session.choose_rating(Rating::new(1).unwrap()).unwrap();
        }
        if step >= ReviewStep::Product {
            let long = "x".repeat(150);
            session
                .submit_comment(Comment::new(long, CommentBounds::default()).unwrap())
                .unwrap();
        }
        session
    }

    fn description(message: &MessageView) -> &str {
        message.embeds[0].description.as_deref().unwrap()
    }

    #[test]
    fn review_menu_has_five_rating_buttons() {
        let message = render_review_menu(&settings(&[]), &Timestamp::now());
        assert_eq!(
            message.custom_ids(),
            vec!["rating_1", "rating_2", "rating_3", "rating_4", "rating_5"]
        );
        assert!(description(&message).contains("**Step 1 of 3:**"));
        assert!(!message.is_ephemeral());
    }

    #[test]
    fn rating_labels_pluralize() {
        let row = rating_row();
        let labels: Vec<_> = row
            .components
            .iter()
            .map(|c| match c {
                ComponentView::Button(b) => b.label.clone(),
                _ => String::new(),
            })
            .collect();
        assert_eq!(labels[0], "1 Star");
        assert_eq!(labels[4], "5 Stars");
    }

    #[test]
    fn comment_prompt_uses_singular_star() {
        let message = render_prompt(&session_at(ReviewStep::Comment), &settings(&[]));
        assert!(description(&message).contains("★ **Rating:** 1 star\n"));
        assert_eq!(message.custom_ids(), vec![LEAVE_COMMENT]);
    }

    #[test]
    fn product_prompt_truncates_comment_preview() {
        let message = render_prompt(&session_at(ReviewStep::Product), &settings(&["Widget"]));
        let expected = format!("💬 **Comment:** {}...", "x".repeat(100));
        assert!(description(&message).contains(&expected));
        assert_eq!(message.custom_ids(), vec![SELECT_PRODUCT]);
    }

    #[test]
    fn product_prompt_without_catalogue_shows_disabled_button() {
        let message = render_prompt(&session_at(ReviewStep::Product), &settings(&[]));
        assert_eq!(message.custom_ids(), vec![NO_PRODUCTS]);
    }

    #[test]
    fn product_menu_is_capped_at_twenty_five_options() {
        let names: Vec<String> = (0..30).map(|i| format!("P{}", i)).collect();
        let row = product_row(&names);
        match &row.components[0] {
            ComponentView::SelectMenu(menu) => {
                assert_eq!(menu.options.len(), MAX_PRODUCTS);
                assert_eq!(menu.options[24].value, "product_24");
            }
            other => panic!("unexpected component {:?}", other),
        }
    }

    fn review() -> Review {
        Review {
            id: ReviewId::new(42),
            user_id: UserId::new("u1").unwrap(),
            user_name: "Alice".into(),
            guild_id: GuildId::new("guild-1").unwrap(),
            rating: Rating::new(3).unwrap(),
            comment: Comment::new("x".repeat(150), CommentBounds::default()).unwrap(),
            product: "Widget".into(),
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn complete_card_is_green_with_full_comment() {
        let message = render_complete(&review(), &settings(&[]));
        assert_eq!(message.embeds[0].color, 0x27ae60);
        assert!(description(&message).starts_with("✅ **Review Complete!**"));
        assert!(description(&message).contains(&"x".repeat(150)));
        assert!(message.components.is_empty());
    }

    #[test]
    fn announcement_has_star_bar_and_footer() {
        let message = render_announcement(&review(), &settings(&[]));
        let embed = &message.embeds[0];
        assert_eq!(embed.title.as_deref(), Some(ANNOUNCEMENT_TITLE));
        assert!(description(&message).contains("**Rating:** ★★★☆☆ (3/5)"));
        assert!(description(&message).contains("**Customer:** Alice"));
        assert_eq!(embed.footer.as_ref().unwrap().text, "Review ID: 42");
    }

    #[test]
    fn comment_modal_uses_configured_bounds() {
        let modal = render_comment_modal(CommentBounds::new(20, 500));
        match &modal.components[0].components[0] {
            ComponentView::TextInput(input) => {
                assert_eq!(input.custom_id, COMMENT_TEXT);
                assert_eq!(input.min_length, Some(20));
                assert_eq!(input.max_length, Some(500));
            }
            other => panic!("unexpected component {:?}", other),
        }
    }
}
