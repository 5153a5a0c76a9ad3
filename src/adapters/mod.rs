//! Adapters - Implementations of port interfaces and the inbound edge.
//!
//! - `interaction` - Decoded interactions in, platform responses out
//! - `presentation` - Embeds, components and modals for every flow state
//! - `http` - axum server exposing the interaction endpoint
//! - `discord` - REST notifier posting review announcements
//! - `postgres` - sqlx-backed settings and review stores
//! - `memory` - In-process stores for development and tests

pub mod discord;
pub mod http;
pub mod interaction;
pub mod memory;
pub mod postgres;
pub mod presentation;

pub use discord::{DiscordChannelNotifier, DiscordConfig};
pub use interaction::{Interaction, InteractionResponse, InteractionRouter};
pub use memory::{InMemoryReviewStore, InMemorySettingsStore};
pub use postgres::{PostgresReviewStore, PostgresSettingsStore};
