//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `REVIEW_DESK` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use review_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod discord;
mod error;
mod review;
mod server;
mod storage;

pub use database::DatabaseConfig;
pub use discord::DiscordApiConfig;
pub use error::{ConfigError, ValidationError};
pub use review::ReviewConfig;
pub use server::{Environment, LogFormat, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Store backend selection
    #[serde(default)]
    pub storage: StorageConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Chat platform REST API (announcements)
    pub discord: DiscordApiConfig,

    /// Review flow tuning
    #[serde(default)]
    pub review: ReviewConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `REVIEW_DESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `REVIEW_DESK__SERVER__PORT=5000` -> `server.port = 5000`
    /// - `REVIEW_DESK__DISCORD__BOT_TOKEN=...` -> `discord.bot_token = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REVIEW_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The database section is only checked when the postgres backend is
    /// selected. The announcement timeout has to fit inside the interaction
    /// deadline.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if self.storage.uses_postgres() {
            self.database.validate()?;
        }
        self.discord.validate()?;
        if self.discord.timeout() >= self.server.request_timeout() {
            return Err(ValidationError::NotifierTimeoutTooLong);
        }
        self.review.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
