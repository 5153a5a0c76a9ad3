//! Chat platform REST configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::discord::{DiscordConfig, DEFAULT_API_BASE};

/// Credentials and endpoint for posting announcements.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordApiConfig {
    /// Bot token, sent as `Authorization: Bot <token>`
    pub bot_token: Secret<String>,

    /// REST API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Announcement timeout in seconds. Also bounds the commit step, so it
    /// must stay below the interaction deadline.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl DiscordApiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Client configuration for the channel notifier.
    pub fn client_config(&self) -> DiscordConfig {
        DiscordConfig::new(self.bot_token.expose_secret().clone())
            .with_api_base(self.api_base.clone())
            .with_timeout(self.timeout())
    }

    /// Validate platform configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bot_token.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("DISCORD__BOT_TOKEN"));
        }
        if !self.api_base.starts_with("https://") && !self.api_base.starts_with("http://") {
            return Err(ValidationError::InvalidApiBase);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout() -> u64 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: &str) -> DiscordApiConfig {
        DiscordApiConfig {
            bot_token: Secret::new(token.to_string()),
            api_base: default_api_base(),
            timeout_secs: default_timeout(),
        }
    }

    #[test]
    fn valid_token_passes() {
        assert!(config("abc.def").validate().is_ok());
    }

    #[test]
    fn blank_token_is_missing() {
        assert_eq!(
            config("  ").validate(),
            Err(ValidationError::MissingRequired("DISCORD__BOT_TOKEN"))
        );
    }

    #[test]
    fn api_base_must_be_http_url() {
        let config = DiscordApiConfig {
            api_base: "discord.com".to_string(),
            ..config("abc")
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidApiBase));
    }

    #[test]
    fn debug_output_hides_token() {
        let printed = format!("{:?}", config("super-secret"));
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn client_config_carries_endpoint_and_timeout() {
        let client = DiscordApiConfig {
            api_base: "http://localhost:9000/api/".to_string(),
            timeout_secs: 3,
            ..config("abc")
        }
        .client_config();
        assert_eq!(client.api_base, "http://localhost:9000/api");
        assert_eq!(client.timeout, Duration::from_secs(3));
    }
}
