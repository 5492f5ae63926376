//! Application configuration loaded from environment variables.

use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_CLICKHOUSE_URL: &str = "http://localhost:8123";
const DEFAULT_CLICKHOUSE_DATABASE: &str = "profilecards";
const DEFAULT_BASE_URL: &str = "http://localhost:8081";
const DEFAULT_SITE_NAME: &str = "Profil Kartları";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8081").
    pub bind_addr: String,

    /// ClickHouse connection URL.
    pub clickhouse_url: String,

    /// ClickHouse database name.
    pub clickhouse_database: String,

    /// Public base URL of this service (used for canonical links).
    pub base_url: String,

    /// Site name shown in page titles and OG tags.
    pub site_name: String,

    /// JSON seed file for the in-memory store. When set, ClickHouse is not used.
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            clickhouse_url: DEFAULT_CLICKHOUSE_URL.to_string(),
            clickhouse_database: DEFAULT_CLICKHOUSE_DATABASE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            seed_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PROFILECARDS_BIND_ADDR`: Server bind address (default: "0.0.0.0:8081")
    /// - `CLICKHOUSE_URL`: ClickHouse URL (default: "http://localhost:8123")
    /// - `CLICKHOUSE_DATABASE`: Database name (default: "profilecards")
    /// - `PROFILECARDS_BASE_URL`: Base URL for links (default: "http://localhost:8081")
    /// - `PROFILECARDS_SITE_NAME`: Site name (default: "Profil Kartları")
    /// - `PROFILECARDS_SEED_PATH`: Serve from a JSON seed file instead of ClickHouse
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("PROFILECARDS_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let clickhouse_url =
            std::env::var("CLICKHOUSE_URL").unwrap_or_else(|_| DEFAULT_CLICKHOUSE_URL.to_string());

        let clickhouse_database = std::env::var("CLICKHOUSE_DATABASE")
            .unwrap_or_else(|_| DEFAULT_CLICKHOUSE_DATABASE.to_string());

        let base_url = std::env::var("PROFILECARDS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("PROFILECARDS_SITE_NAME")
            .unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string());

        let seed_path = std::env::var("PROFILECARDS_SEED_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        if let Err(err) = url::Url::parse(&base_url) {
            anyhow::bail!("PROFILECARDS_BASE_URL {base_url:?} is not a valid URL: {err}");
        }

        if let Some(path) = &seed_path
            && !path.exists()
        {
            anyhow::bail!("PROFILECARDS_SEED_PATH {} does not exist", path.display());
        }

        tracing::info!(
            bind_addr = %bind_addr,
            clickhouse_url = %clickhouse_url,
            base_url = %base_url,
            site_name = %site_name,
            seed = ?seed_path,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            clickhouse_url,
            clickhouse_database,
            base_url,
            site_name,
            seed_path,
        })
    }
}
