//! ClickHouse-backed profile store.
//!
//! All reads are point lookups by slug or user id. `user_profiles` and
//! `users` are replacing tables: a query only ever sees the latest row per
//! user id, and the public filter is applied to that row.

use async_trait::async_trait;
use clickhouse::Client;
use profilecards_core::{NamedItem, TitledItem};
use serde::Deserialize;

use super::{PersonalInfoRecord, ProfileRecord, ProfileStore, StoreError};

/// Latest `user_profiles` row per candidate id, filtered afterwards.
///
/// Candidates are every id that ever carried the slug, so a profile whose
/// slug was changed away or which went private drops out here rather than
/// matching on a stale row. Two rows are enough to detect a non-unique slug.
const PUBLIC_PROFILE_QUERY: &str = "\
SELECT id, latest_slug AS public_slug, latest_cards AS visible_cards \
FROM ( \
    SELECT id, \
           argMax(public_slug, updated_at) AS latest_slug, \
           argMax(is_public, updated_at) AS latest_public, \
           argMax(visible_cards, updated_at) AS latest_cards \
    FROM user_profiles \
    WHERE id IN (SELECT id FROM user_profiles WHERE public_slug = ?) \
    GROUP BY id \
) \
WHERE latest_slug = ? AND latest_public \
LIMIT 2";

const PERSONAL_INFO_QUERY: &str = "\
SELECT school, zodiac_sign \
FROM users FINAL \
WHERE id = ? \
LIMIT 1";

/// A row from `user_profiles`.
#[derive(Debug, Clone, Deserialize, clickhouse::Row)]
struct ProfileRow {
    id: String,
    public_slug: String,
    visible_cards: Vec<String>,
}

/// A row from `users`.
#[derive(Debug, Clone, Deserialize, clickhouse::Row)]
struct PersonalRow {
    school: Option<String>,
    zodiac_sign: Option<String>,
}

#[derive(Debug, Clone, Deserialize, clickhouse::Row)]
struct NameRow {
    name: String,
}

#[derive(Debug, Clone, Deserialize, clickhouse::Row)]
struct TitleRow {
    title: String,
}

/// Store reading the profile tables from ClickHouse.
#[derive(Clone)]
pub struct ClickHouseStore {
    client: Client,
}

impl ClickHouseStore {
    /// Build a store for the given server and database.
    pub fn new(url: &str, database: &str) -> Self {
        let client = Client::default().with_url(url).with_database(database);
        Self { client }
    }

    async fn names(&self, table: &str, user_id: &str) -> Result<Vec<NamedItem>, StoreError> {
        let rows = self
            .client
            .query(&format!("SELECT name FROM {table} WHERE user_id = ?"))
            .bind(user_id)
            .fetch_all::<NameRow>()
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| NamedItem { name: r.name })
            .collect())
    }

    async fn titles(&self, table: &str, user_id: &str) -> Result<Vec<TitledItem>, StoreError> {
        let rows = self
            .client
            .query(&format!("SELECT title FROM {table} WHERE user_id = ?"))
            .bind(user_id)
            .fetch_all::<TitleRow>()
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| TitledItem { title: r.title })
            .collect())
    }
}

#[async_trait]
impl ProfileStore for ClickHouseStore {
    fn backend(&self) -> &'static str {
        "clickhouse"
    }

    async fn public_profile(&self, slug: &str) -> Result<Option<ProfileRecord>, StoreError> {
        let mut rows = self
            .client
            .query(PUBLIC_PROFILE_QUERY)
            .bind(slug)
            .bind(slug)
            .fetch_all::<ProfileRow>()
            .await?;

        if rows.len() > 1 {
            return Err(StoreError::Ambiguous {
                slug: slug.to_string(),
                matches: rows.len(),
            });
        }

        Ok(rows.pop().map(|row| ProfileRecord {
            id: row.id,
            public_slug: row.public_slug,
            visible_cards: Some(row.visible_cards),
        }))
    }

    async fn personal_info(
        &self,
        user_id: &str,
    ) -> Result<Option<PersonalInfoRecord>, StoreError> {
        let row = self
            .client
            .query(PERSONAL_INFO_QUERY)
            .bind(user_id)
            .fetch_optional::<PersonalRow>()
            .await?;

        Ok(row.map(|r| PersonalInfoRecord {
            school: r.school,
            zodiac_sign: r.zodiac_sign,
        }))
    }

    async fn favorite_games(&self, user_id: &str) -> Result<Vec<NamedItem>, StoreError> {
        self.names("popular_games", user_id).await
    }

    async fn favorite_apps(&self, user_id: &str) -> Result<Vec<NamedItem>, StoreError> {
        self.names("popular_apps", user_id).await
    }

    async fn favorite_songs(&self, user_id: &str) -> Result<Vec<TitledItem>, StoreError> {
        self.titles("favorite_songs", user_id).await
    }

    async fn favorite_movies(&self, user_id: &str) -> Result<Vec<TitledItem>, StoreError> {
        self.titles("favorite_movies", user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = include_str!("../../../../schema/clickhouse.sql");

    #[test]
    fn public_filter_applies_to_latest_row() {
        let (inner, outer) = PUBLIC_PROFILE_QUERY
            .rsplit_once(") WHERE")
            .expect("outer filter after the collapsing subquery");

        assert!(inner.contains("argMax(is_public, updated_at)"));
        assert!(inner.contains("argMax(public_slug, updated_at)"));
        assert!(inner.contains("GROUP BY id"));
        assert!(!inner.contains("is_public ="));
        assert!(outer.contains("latest_public"));
        assert!(outer.contains("latest_slug = ?"));
    }

    #[test]
    fn public_profile_binds_slug_twice() {
        assert_eq!(PUBLIC_PROFILE_QUERY.matches('?').count(), 2);
        assert!(PUBLIC_PROFILE_QUERY.ends_with("LIMIT 2"));
    }

    #[test]
    fn personal_info_reads_collapsed_rows() {
        assert!(PERSONAL_INFO_QUERY.contains("FROM users FINAL"));
        assert_eq!(PERSONAL_INFO_QUERY.matches('?').count(), 1);
    }

    #[test]
    fn replacing_tables_carry_version_column() {
        assert_eq!(SCHEMA.matches("ReplacingMergeTree(updated_at)").count(), 2);
        assert!(!SCHEMA.contains("ENGINE = ReplacingMergeTree\n"));
    }

    #[test]
    fn store_reports_backend() {
        let store = ClickHouseStore::new("http://localhost:8123", "profilecards");
        assert_eq!(store.backend(), "clickhouse");
    }
}
