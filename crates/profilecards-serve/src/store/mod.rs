//! Data-access seam for the aggregator.
//!
//! The aggregator only depends on the [`ProfileStore`] read contract. The
//! store is constructed once per process and injected through
//! [`AppState`](crate::AppState); handlers never reach for a global client.
//!
//! Backends:
//! - [`ClickHouseStore`]: production tables in ClickHouse
//! - [`MemoryStore`]: in-process data for tests and local development

mod clickhouse;
mod memory;

use std::fmt;

use async_trait::async_trait;
use profilecards_core::{NamedItem, TitledItem};

pub use self::clickhouse::ClickHouseStore;
pub use self::memory::{MemoryStore, ProfileSeed, Seed};

/// The profile row a public slug resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    /// Internal user id keying every other table.
    pub id: String,
    /// Slug the profile is published under.
    pub public_slug: String,
    /// Card names the owner allows; `None` when the column is unset.
    pub visible_cards: Option<Vec<String>>,
}

/// A row of personal details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoRecord {
    pub school: Option<String>,
    pub zodiac_sign: Option<String>,
}

/// The individual reads the aggregator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lookup {
    Profile,
    PersonalInfo,
    Games,
    Apps,
    Songs,
    Movies,
}

impl Lookup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::PersonalInfo => "personal_info",
            Self::Games => "games",
            Self::Apps => "apps",
            Self::Songs => "songs",
            Self::Movies => "movies",
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internal store failures. Never shown to callers.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// ClickHouse query error.
    #[error("database error: {0}")]
    Database(#[from] ::clickhouse::error::Error),

    /// More than one public profile carries the slug.
    #[error("slug '{slug}' matched {matches} public profiles")]
    Ambiguous {
        /// The requested slug.
        slug: String,
        /// Number of matching rows seen.
        matches: usize,
    },

    /// The backend could not serve the lookup.
    #[error("{0} lookup unavailable")]
    Unavailable(Lookup),
}

/// Read contract the aggregator depends on.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// The single public profile published under `slug`.
    ///
    /// Returns `Ok(None)` when nothing matches and
    /// [`StoreError::Ambiguous`] when more than one row does.
    async fn public_profile(&self, slug: &str) -> Result<Option<ProfileRecord>, StoreError>;

    /// Personal details for a user, if a row exists.
    async fn personal_info(
        &self,
        user_id: &str,
    ) -> Result<Option<PersonalInfoRecord>, StoreError>;

    async fn favorite_games(&self, user_id: &str) -> Result<Vec<NamedItem>, StoreError>;

    async fn favorite_apps(&self, user_id: &str) -> Result<Vec<NamedItem>, StoreError>;

    async fn favorite_songs(&self, user_id: &str) -> Result<Vec<TitledItem>, StoreError>;

    async fn favorite_movies(&self, user_id: &str) -> Result<Vec<TitledItem>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_names() {
        assert_eq!(Lookup::PersonalInfo.to_string(), "personal_info");
        assert_eq!(Lookup::Movies.as_str(), "movies");
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::Ambiguous {
            slug: "ayse".to_string(),
            matches: 2,
        };
        assert_eq!(err.to_string(), "slug 'ayse' matched 2 public profiles");
        assert_eq!(
            StoreError::Unavailable(Lookup::Songs).to_string(),
            "songs lookup unavailable"
        );
    }

    #[test]
    fn lookup_deserializes_snake_case() {
        let lookup: Lookup = serde_json::from_str("\"personal_info\"").unwrap();
        assert_eq!(lookup, Lookup::PersonalInfo);
    }
}
