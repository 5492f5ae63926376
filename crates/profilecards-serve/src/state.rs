//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::{ClickHouseStore, MemoryStore, ProfileStore};

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Data-access backend, constructed once per process.
    pub store: Arc<dyn ProfileStore>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state, choosing the store from configuration.
    ///
    /// A seed path selects the in-memory store; otherwise ClickHouse is used.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn ProfileStore> = match &config.seed_path {
            Some(path) => Arc::new(MemoryStore::from_seed_file(path)?),
            None => Arc::new(ClickHouseStore::new(
                &config.clickhouse_url,
                &config.clickhouse_database,
            )),
        };

        Ok(Self::with_store(config, store))
    }

    /// Create application state around an existing store.
    pub fn with_store(config: Config, store: Arc<dyn ProfileStore>) -> Self {
        tracing::info!(backend = store.backend(), "application state initialized");

        Self {
            store,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_clickhouse() {
        let state = AppState::new(Config::default()).unwrap();
        assert_eq!(state.store.backend(), "clickhouse");
    }

    #[test]
    fn seed_path_selects_memory_store() {
        let path = std::env::temp_dir().join("profilecards-state-seed.json");
        std::fs::write(&path, r#"{"profiles": []}"#).unwrap();

        let config = Config {
            seed_path: Some(path.clone()),
            ..Config::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.store.backend(), "memory");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_seed_is_error() {
        let path = std::env::temp_dir().join("profilecards-state-bad-seed.json");
        std::fs::write(&path, "not json").unwrap();

        let config = Config {
            seed_path: Some(path.clone()),
            ..Config::default()
        };
        assert!(AppState::new(config).is_err());

        let _ = std::fs::remove_file(&path);
    }
}
