//! HTTP handlers for the bot endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};

use crate::adapters::interaction::{Interaction, InteractionResponse, InteractionRouter};
use crate::adapters::presentation::render_generic_error;
use crate::application::SessionRegistry;

use super::dto::HealthResponse;

/// Liveness text served at the root.
pub const ALIVE_TEXT: &str = "Bot is running!";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct BotAppState {
    router: Arc<InteractionRouter>,
    registry: SessionRegistry,
    deadline: Duration,
}

impl BotAppState {
    /// `deadline` bounds a single dispatch. Past it the user gets the generic
    /// error reply instead of a bare timeout status.
    pub fn new(
        router: Arc<InteractionRouter>,
        registry: SessionRegistry,
        deadline: Duration,
    ) -> Self {
        Self {
            router,
            registry,
            deadline,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Liveness check
pub async fn alive() -> &'static str {
    ALIVE_TEXT
}

/// GET /health - Status, version and live session count
pub async fn health(State(state): State<BotAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        active_sessions: state.registry.len().await,
    })
}

/// POST /interactions - Handle one decoded interaction
pub async fn handle_interaction(
    State(state): State<BotAppState>,
    Json(interaction): Json<Interaction>,
) -> Json<InteractionResponse> {
    match tokio::time::timeout(state.deadline, state.router.dispatch(interaction)).await {
        Ok(response) => Json(response),
        Err(_) => {
            tracing::warn!(
                deadline_ms = state.deadline.as_millis() as u64,
                "Interaction dispatch exceeded deadline"
            );
            Json(InteractionResponse::Reply(render_generic_error()))
        }
    }
}
