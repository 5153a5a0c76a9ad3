//! Storage backend selection

use serde::Deserialize;

/// Which store adapters back the settings and review ports.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL via `database.url`.
    #[default]
    Postgres,
    /// Process memory; lost on restart.
    Memory,
}

impl StorageConfig {
    pub fn uses_postgres(&self) -> bool {
        self.backend == StorageBackend::Postgres
    }
}
