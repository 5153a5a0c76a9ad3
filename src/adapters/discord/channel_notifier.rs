//! Discord channel notifier - posts review announcements over the REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = DiscordConfig::new(bot_token)
//!     .with_api_base("https://discord.com/api/v10")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let notifier = DiscordChannelNotifier::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::adapters::presentation::{render_announcement, MessageView};
use crate::domain::foundation::ChannelId;
use crate::domain::review::Review;
use crate::domain::settings::GuildSettings;
use crate::ports::{NotifyError, ReviewNotifier};

pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Configuration for the Discord REST client.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    bot_token: Secret<String>,
    /// Base URL of the REST API, without trailing slash.
    pub api_base: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl DiscordConfig {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: Secret::new(bot_token.into()),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn authorization(&self) -> String {
        format!("Bot {}", self.bot_token.expose_secret())
    }
}

/// Posts announcements with the bot's token.
pub struct DiscordChannelNotifier {
    config: DiscordConfig,
    client: Client,
}

impl DiscordChannelNotifier {
    pub fn new(config: DiscordConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NotifyError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn messages_url(&self, channel_id: &ChannelId) -> String {
        format!("{}/channels/{}/messages", self.config.api_base, channel_id)
    }

    async fn post_message(
        &self,
        channel_id: &ChannelId,
        message: &MessageView,
    ) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.messages_url(channel_id))
            .header(reqwest::header::AUTHORIZATION, self.config.authorization())
            .json(message)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Transport(format!("Request timed out: {}", e))
                } else {
                    NotifyError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, channel_id, body))
    }
}

fn status_error(status: StatusCode, channel_id: &ChannelId, body: String) -> NotifyError {
    match status {
        StatusCode::NOT_FOUND => NotifyError::ChannelNotFound(channel_id.clone()),
        StatusCode::FORBIDDEN => NotifyError::Forbidden(channel_id.clone()),
        _ => NotifyError::Api {
            status: status.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl ReviewNotifier for DiscordChannelNotifier {
    async fn announce(
        &self,
        channel_id: &ChannelId,
        review: &Review,
        settings: &GuildSettings,
    ) -> Result<(), NotifyError> {
        let message = render_announcement(review, settings);
        self.post_message(channel_id, &message).await?;
        tracing::debug!(review_id = %review.id, channel_id = %channel_id, "Review announced");
        Ok(())
    }
}
