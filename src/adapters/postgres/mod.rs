//! PostgreSQL adapters - Database implementations for the store ports.
//!
//! - `PostgresSettingsStore` - per-guild settings with lazy default rows
//! - `PostgresReviewStore` - append-only reviews

mod review_store;
mod settings_store;

pub use review_store::PostgresReviewStore;
pub use settings_store::PostgresSettingsStore;
