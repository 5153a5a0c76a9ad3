//! HTTP adapter for the bot: liveness, health and the interaction endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::HealthResponse;
pub use handlers::{BotAppState, ALIVE_TEXT};
pub use routes::{bot_router, bot_routes};
