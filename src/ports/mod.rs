//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the review flow and the outside world. Adapters implement these ports.
//!
//! - `SettingsStore` - per-guild configuration (lazy defaults, partial upsert)
//! - `ReviewStore` - append-only completed reviews
//! - `ReviewNotifier` - best-effort channel announcement after a commit

mod review_notifier;
mod review_store;
mod settings_store;

pub use review_notifier::{NotifyError, ReviewNotifier};
pub use review_store::ReviewStore;
pub use settings_store::SettingsStore;
