//! In-memory profile store.
//!
//! Holds the same tables as the ClickHouse schema as plain vectors. Used by
//! tests and for local development via `PROFILECARDS_SEED_PATH`, a JSON file
//! shaped like [`Seed`]:
//!
//! ```json
//! {
//!   "profiles": [{ "id": "u1", "public_slug": "ayse", "is_public": true, "visible_cards": ["music"] }],
//!   "users": [{ "id": "u1", "school": null, "zodiac_sign": "Koç" }],
//!   "popular_games": [{ "user_id": "u1", "name": "Tetris" }],
//!   "popular_apps": [],
//!   "favorite_songs": [{ "user_id": "u1", "title": "X" }],
//!   "favorite_movies": []
//! }
//! ```
//!
//! Lookups can be made to fail or to wait, to exercise degraded and
//! concurrent aggregation.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use profilecards_core::{NamedItem, TitledItem};
use serde::Deserialize;

use super::{Lookup, PersonalInfoRecord, ProfileRecord, ProfileStore, StoreError};

/// A `user_profiles` row.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSeed {
    pub id: String,
    pub public_slug: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub visible_cards: Option<Vec<String>>,
}

/// A `users` row.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSeed {
    pub id: String,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub zodiac_sign: Option<String>,
}

/// A row of `popular_games` / `popular_apps`.
#[derive(Debug, Clone, Deserialize)]
pub struct NameSeed {
    pub user_id: String,
    pub name: String,
}

/// A row of `favorite_songs` / `favorite_movies`.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleSeed {
    pub user_id: String,
    pub title: String,
}

/// Contents of a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub profiles: Vec<ProfileSeed>,
    pub users: Vec<UserSeed>,
    pub popular_games: Vec<NameSeed>,
    pub popular_apps: Vec<NameSeed>,
    pub favorite_songs: Vec<TitleSeed>,
    pub favorite_movies: Vec<TitleSeed>,
    /// Lookups that always fail.
    pub failing: HashSet<Lookup>,
    /// Artificial latency added to every lookup, in milliseconds.
    pub delay_ms: u64,
}

/// Store backed by in-process tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    seed: Seed,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed data.
    pub fn from_seed(seed: Seed) -> Self {
        Self { seed }
    }

    /// Load a JSON seed file.
    pub fn from_seed_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        let seed: Seed = serde_json::from_str(&raw)
            .with_context(|| format!("parsing seed file {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            profiles = seed.profiles.len(),
            "memory store seeded"
        );

        Ok(Self::from_seed(seed))
    }

    pub fn with_profile(mut self, profile: ProfileSeed) -> Self {
        self.seed.profiles.push(profile);
        self
    }

    pub fn with_personal_info(
        mut self,
        user_id: &str,
        school: Option<&str>,
        zodiac_sign: Option<&str>,
    ) -> Self {
        self.seed.users.push(UserSeed {
            id: user_id.to_string(),
            school: school.map(str::to_string),
            zodiac_sign: zodiac_sign.map(str::to_string),
        });
        self
    }

    pub fn with_game(mut self, user_id: &str, name: &str) -> Self {
        self.seed.popular_games.push(name_seed(user_id, name));
        self
    }

    pub fn with_app(mut self, user_id: &str, name: &str) -> Self {
        self.seed.popular_apps.push(name_seed(user_id, name));
        self
    }

    pub fn with_song(mut self, user_id: &str, title: &str) -> Self {
        self.seed.favorite_songs.push(title_seed(user_id, title));
        self
    }

    pub fn with_movie(mut self, user_id: &str, title: &str) -> Self {
        self.seed.favorite_movies.push(title_seed(user_id, title));
        self
    }

    /// Make `lookup` fail on every call.
    pub fn failing(mut self, lookup: Lookup) -> Self {
        self.seed.failing.insert(lookup);
        self
    }

    /// Delay every lookup by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.seed.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    async fn enter(&self, lookup: Lookup) -> Result<(), StoreError> {
        if self.seed.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.seed.delay_ms)).await;
        }
        if self.seed.failing.contains(&lookup) {
            return Err(StoreError::Unavailable(lookup));
        }
        Ok(())
    }
}

fn name_seed(user_id: &str, name: &str) -> NameSeed {
    NameSeed {
        user_id: user_id.to_string(),
        name: name.to_string(),
    }
}

fn title_seed(user_id: &str, title: &str) -> TitleSeed {
    TitleSeed {
        user_id: user_id.to_string(),
        title: title.to_string(),
    }
}

fn names_for(rows: &[NameSeed], user_id: &str) -> Vec<NamedItem> {
    rows.iter()
        .filter(|r| r.user_id == user_id)
        .map(|r| NamedItem {
            name: r.name.clone(),
        })
        .collect()
}

fn titles_for(rows: &[TitleSeed], user_id: &str) -> Vec<TitledItem> {
    rows.iter()
        .filter(|r| r.user_id == user_id)
        .map(|r| TitledItem {
            title: r.title.clone(),
        })
        .collect()
}

#[async_trait]
impl ProfileStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn public_profile(&self, slug: &str) -> Result<Option<ProfileRecord>, StoreError> {
        self.enter(Lookup::Profile).await?;

        let matches: Vec<_> = self
            .seed
            .profiles
            .iter()
            .filter(|p| p.is_public && p.public_slug == slug)
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [profile] => Ok(Some(ProfileRecord {
                id: profile.id.clone(),
                public_slug: profile.public_slug.clone(),
                visible_cards: profile.visible_cards.clone(),
            })),
            many => Err(StoreError::Ambiguous {
                slug: slug.to_string(),
                matches: many.len(),
            }),
        }
    }

    async fn personal_info(
        &self,
        user_id: &str,
    ) -> Result<Option<PersonalInfoRecord>, StoreError> {
        self.enter(Lookup::PersonalInfo).await?;

        Ok(self
            .seed
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| PersonalInfoRecord {
                school: u.school.clone(),
                zodiac_sign: u.zodiac_sign.clone(),
            }))
    }

    async fn favorite_games(&self, user_id: &str) -> Result<Vec<NamedItem>, StoreError> {
        self.enter(Lookup::Games).await?;
        Ok(names_for(&self.seed.popular_games, user_id))
    }

    async fn favorite_apps(&self, user_id: &str) -> Result<Vec<NamedItem>, StoreError> {
        self.enter(Lookup::Apps).await?;
        Ok(names_for(&self.seed.popular_apps, user_id))
    }

    async fn favorite_songs(&self, user_id: &str) -> Result<Vec<TitledItem>, StoreError> {
        self.enter(Lookup::Songs).await?;
        Ok(titles_for(&self.seed.favorite_songs, user_id))
    }

    async fn favorite_movies(&self, user_id: &str) -> Result<Vec<TitledItem>, StoreError> {
        self.enter(Lookup::Movies).await?;
        Ok(titles_for(&self.seed.favorite_movies, user_id))
    }
}
