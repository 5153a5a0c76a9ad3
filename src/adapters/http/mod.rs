//! HTTP adapters - the web server the platform delivers interactions to.

pub mod bot;

pub use bot::{bot_router, BotAppState};
