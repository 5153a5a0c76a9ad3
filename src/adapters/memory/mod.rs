//! In-memory store adapters.
//!
//! Used by the `memory` storage backend and by tests. Data lives only as
//! long as the process.

mod review_store;
mod settings_store;

pub use review_store::InMemoryReviewStore;
pub use settings_store::InMemorySettingsStore;
