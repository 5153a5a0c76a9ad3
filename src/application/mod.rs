//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates the review flow and the settings surfaces,
//! coordinating the session registry with the store and notifier ports.

pub mod handlers;
pub mod session_registry;

pub use handlers::*;
pub use session_registry::{SessionGuard, SessionRegistry};
