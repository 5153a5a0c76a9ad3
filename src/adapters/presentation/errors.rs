//! User-visible error replies. Every error becomes an ephemeral message.

use crate::domain::foundation::ValidationError;
use crate::domain::review::ReviewError;
use crate::domain::settings::SettingsError;

use super::views::MessageView;

pub const GENERIC_ERROR: &str = "An error occurred while processing your request.";
pub const SESSION_EXPIRED: &str = "Review session expired. Please start over with /reviewmenu";
pub const SUBMIT_FAILED: &str = "There was an error submitting your review. Please try again later.";
pub const PERMISSION_DENIED: &str = "You do not have permission to use this command.";

pub fn render_review_error(err: &ReviewError) -> MessageView {
    let text = match err {
        ReviewError::SessionExpired => SESSION_EXPIRED.to_string(),
        ReviewError::StepAlreadyCompleted { .. } => {
            "That step of your review is already complete.".to_string()
        }
        ReviewError::ValidationFailed { field, message } if field == "comment" => {
            format!("Your comment could not be accepted: {}", message)
        }
        ReviewError::ValidationFailed { message, .. } => format!("Invalid input: {}", message),
        ReviewError::CatalogEmpty => {
            "No products are configured for this server yet. Please ask an administrator to add some."
                .to_string()
        }
        ReviewError::StorageFailure(_) => SUBMIT_FAILED.to_string(),
    };
    MessageView::ephemeral_text(text)
}

pub fn render_settings_error(err: &SettingsError) -> MessageView {
    let text = match err {
        SettingsError::PermissionDenied => PERMISSION_DENIED.to_string(),
        SettingsError::NotTextChannel => "Please select a text channel.".to_string(),
        SettingsError::ValidationFailed(invalid) => validation_text(invalid),
        SettingsError::StorageFailure(_) => {
            "Failed to save settings. Please try again later.".to_string()
        }
    };
    MessageView::ephemeral_text(text)
}

pub fn render_generic_error() -> MessageView {
    MessageView::ephemeral_text(GENERIC_ERROR)
}

fn validation_text(err: &ValidationError) -> String {
    match (err.field(), err) {
        ("embed_color", _) => {
            "Invalid hex color format. Please use format like #3498db".to_string()
        }
        ("products", ValidationError::EmptyField { .. }) => {
            "Please provide at least one product/item.".to_string()
        }
        ("products", ValidationError::OutOfRange { .. }) => {
            "Maximum 25 products allowed due to Discord limitations.".to_string()
        }
        ("admin_roles", ValidationError::OutOfRange { max, .. }) => {
            format!("Maximum {} admin roles allowed.", max)
        }
        ("admin_roles", _) => {
            "Please list role ids or role mentions like <@&123>, one per line.".to_string()
        }
        _ => format!("Invalid input: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(message: MessageView) -> String {
        assert!(message.is_ephemeral());
        message.content.unwrap_or_default()
    }

    #[test]
    fn session_expired_points_back_to_the_menu() {
        assert_eq!(text(render_review_error(&ReviewError::SessionExpired)), SESSION_EXPIRED);
    }

    #[test]
    fn storage_failure_uses_submission_message() {
        let err = ReviewError::storage("db down");
        assert_eq!(text(render_review_error(&err)), SUBMIT_FAILED);
    }

    #[test]
    fn color_errors_use_hex_hint() {
        let err = SettingsError::ValidationFailed(ValidationError::invalid_format(
            "embed_color",
            "bad",
        ));
        assert_eq!(
            text(render_settings_error(&err)),
            "Invalid hex color format. Please use format like #3498db"
        );
    }

    #[test]
    fn product_count_errors_are_distinguished() {
        let empty = SettingsError::ValidationFailed(ValidationError::empty_field("products"));
        let too_many =
            SettingsError::ValidationFailed(ValidationError::out_of_range("products", 1, 25, 26));
        assert_eq!(
            text(render_settings_error(&empty)),
            "Please provide at least one product/item."
        );
        assert_eq!(
            text(render_settings_error(&too_many)),
            "Maximum 25 products allowed due to Discord limitations."
        );
    }

    #[test]
    fn permission_denied_message() {
        assert_eq!(
            text(render_settings_error(&SettingsError::PermissionDenied)),
            PERMISSION_DENIED
        );
    }
}
