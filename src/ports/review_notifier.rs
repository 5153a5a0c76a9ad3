//! Review announcement port.
//!
//! Delivery is best-effort: a failed announcement is reported through
//! `NotifyError` and never undoes the stored review.

use async_trait::async_trait;

use crate::domain::foundation::ChannelId;
use crate::domain::review::Review;
use crate::domain::settings::GuildSettings;

/// Errors that can occur while announcing a review.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Channel not found: {0}")]
    ChannelNotFound(ChannelId),

    #[error("Missing permission to post in channel: {0}")]
    Forbidden(ChannelId),

    #[error("Platform API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Port for posting a "new review" announcement to a guild channel.
#[async_trait]
pub trait ReviewNotifier: Send + Sync {
    /// Post `review` to `channel_id`, styled with the guild's `settings`.
    async fn announce(
        &self,
        channel_id: &ChannelId,
        review: &Review,
        settings: &GuildSettings,
    ) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn ReviewNotifier) {}
    }

    #[test]
    fn notify_error_displays_channel() {
        let err = NotifyError::ChannelNotFound(ChannelId::new("42").unwrap());
        assert_eq!(err.to_string(), "Channel not found: 42");
    }
}
