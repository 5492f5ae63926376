//! Profile aggregation.
//!
//! Resolves a public slug to a user, reads the personal details and the four
//! favorite collections in parallel, and assembles the [`ProfileDocument`].
//!
//! Failure policy:
//! - missing or empty slug: [`ApiError::InvalidSlug`]
//! - no match, an ambiguous match, or a failed profile read:
//!   [`ApiError::NotFound`] (the cause is only logged)
//! - a failed secondary read: that section is treated as empty

use std::str::FromStr;

use profilecards_core::{
    CardId, CardView, Cards, FavoritesData, NamedItem, PersonalData, ProfileDocument, TitledItem,
    UserSummary,
};

use crate::error::ApiError;
use crate::store::{Lookup, PersonalInfoRecord, ProfileStore, StoreError};

/// Check that a slug is present and non-empty.
///
/// The slug is otherwise passed through as given; it must match a stored
/// `public_slug` exactly.
pub fn validate_slug(slug: Option<&str>) -> Result<&str, ApiError> {
    match slug {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ApiError::InvalidSlug),
    }
}

/// Build the profile document for `slug`.
pub async fn aggregate(
    store: &dyn ProfileStore,
    slug: Option<&str>,
) -> Result<ProfileDocument, ApiError> {
    let slug = validate_slug(slug)?;

    let profile = match store.public_profile(slug).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::debug!(slug = %slug, "no public profile");
            return Err(ApiError::NotFound);
        }
        Err(err) => {
            tracing::warn!(
                slug = %slug,
                backend = store.backend(),
                error = %err,
                "profile lookup failed"
            );
            return Err(ApiError::NotFound);
        }
    };

    let user_id = profile.id.as_str();

    let (personal, games, apps, songs, movies) = tokio::join!(
        or_empty(Lookup::PersonalInfo, user_id, store.personal_info(user_id)),
        or_empty(Lookup::Games, user_id, store.favorite_games(user_id)),
        or_empty(Lookup::Apps, user_id, store.favorite_apps(user_id)),
        or_empty(Lookup::Songs, user_id, store.favorite_songs(user_id)),
        or_empty(Lookup::Movies, user_id, store.favorite_movies(user_id)),
    );

    let visible_cards = parse_visible_cards(slug, profile.visible_cards.as_deref().unwrap_or(&[]));

    tracing::debug!(
        slug = %slug,
        visible = visible_cards.len(),
        songs = songs.len(),
        movies = movies.len(),
        "profile aggregated"
    );

    Ok(ProfileDocument {
        user: UserSummary {
            public_slug: profile.public_slug,
            visible_cards,
        },
        cards: build_cards(personal, games, apps, songs, movies),
    })
}

/// Await a secondary read, substituting empty data on failure.
async fn or_empty<T, F>(lookup: Lookup, user_id: &str, read: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, StoreError>>,
{
    match read.await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                lookup = %lookup,
                user_id = %user_id,
                error = %err,
                "secondary lookup failed, treating as empty"
            );
            T::default()
        }
    }
}

/// Keep known card names, in first-seen order, without duplicates.
fn parse_visible_cards(slug: &str, raw: &[String]) -> Vec<CardId> {
    let mut cards = Vec::with_capacity(raw.len());
    for name in raw {
        match CardId::from_str(name) {
            Ok(card) if !cards.contains(&card) => cards.push(card),
            Ok(_) => {}
            Err(err) => tracing::debug!(slug = %slug, error = %err, "ignoring visible card"),
        }
    }
    cards
}

/// Empty strings count as missing.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Derive each card's `show_card` flag and payload.
fn build_cards(
    personal: Option<PersonalInfoRecord>,
    games: Vec<NamedItem>,
    apps: Vec<NamedItem>,
    songs: Vec<TitledItem>,
    movies: Vec<TitledItem>,
) -> Cards {
    let personal = personal.unwrap_or_default();
    let personal = PersonalData {
        school: non_empty(personal.school),
        zodiac: non_empty(personal.zodiac_sign),
    };

    Cards {
        personal: CardView {
            show_card: personal.school.is_some() || personal.zodiac.is_some(),
            data: personal,
        },
        favorites: CardView {
            show_card: !games.is_empty() || !apps.is_empty(),
            data: FavoritesData { games, apps },
        },
        music: CardView {
            show_card: !songs.is_empty(),
            data: songs,
        },
        films: CardView {
            show_card: !movies.is_empty(),
            data: movies,
        },
    }
}
