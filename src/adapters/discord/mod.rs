//! Discord REST adapters.

mod channel_notifier;

pub use channel_notifier::{DiscordChannelNotifier, DiscordConfig, DEFAULT_API_BASE};
