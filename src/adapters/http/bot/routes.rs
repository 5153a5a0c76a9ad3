//! Axum router configuration for the bot endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{alive, handle_interaction, health, BotAppState};

/// Create the bot router.
///
/// # Routes
///
/// - `GET /` - Liveness text
/// - `GET /health` - Status JSON
/// - `POST /interactions` - Decoded platform interactions
pub fn bot_routes() -> Router<BotAppState> {
    Router::new()
        .route("/", get(alive))
        .route("/health", get(health))
        .route("/interactions", post(handle_interaction))
}

/// Create the complete bot router with request tracing.
///
/// The interaction deadline lives in [`BotAppState`] so an overrun still
/// answers with a platform message.
pub fn bot_router(state: BotAppState) -> Router {
    bot_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
