//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine trait)
//! - `review` - The rating → comment → product flow and review records
//! - `settings` - Per-guild review form configuration and the admin predicate

pub mod foundation;
pub mod review;
pub mod settings;
