//! The aggregate profile document.
//!
//! This is the contract between the aggregator and every renderer:
//!
//! ```json
//! {
//!   "user": { "public_slug": "ayse", "visible_cards": ["music"] },
//!   "cards": {
//!     "personal":  { "show_card": false, "data": { "school": null, "zodiac": null } },
//!     "favorites": { "show_card": false, "data": { "games": [], "apps": [] } },
//!     "music":     { "show_card": true,  "data": [{ "title": "X" }] },
//!     "films":     { "show_card": false, "data": [] }
//!   }
//! }
//! ```
//!
//! Scalars absent from the store are serialized as `null` and collections as
//! `[]`; no key is ever omitted.

use serde::{Deserialize, Serialize};

use crate::card::CardId;
use crate::error::Result;

/// The full response of `GET /api/profile/{slug}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocument {
    /// Public identity and card permissions.
    pub user: UserSummary,
    /// Per-card content.
    pub cards: Cards,
}

/// Public part of the profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Slug the profile is published under.
    pub public_slug: String,
    /// Cards the owner allows visitors to open.
    #[serde(default)]
    pub visible_cards: Vec<CardId>,
}

/// One card: whether it has content, plus its typed payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView<T> {
    /// True when the underlying data is non-empty.
    pub show_card: bool,
    /// Card-specific payload.
    pub data: T,
}

/// Payload of the `personal` card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalData {
    /// School name.
    pub school: Option<String>,
    /// Zodiac sign.
    pub zodiac: Option<String>,
}

/// Payload of the `favorites` card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesData {
    /// Favorite games.
    #[serde(default)]
    pub games: Vec<NamedItem>,
    /// Favorite apps.
    #[serde(default)]
    pub apps: Vec<NamedItem>,
}

/// A favorite identified by name (games, apps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedItem {
    /// Display name.
    pub name: String,
}

/// A favorite identified by title (songs, movies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledItem {
    /// Display title.
    pub title: String,
}

/// The four cards of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cards {
    pub personal: CardView<PersonalData>,
    pub favorites: CardView<FavoritesData>,
    pub music: CardView<Vec<TitledItem>>,
    pub films: CardView<Vec<TitledItem>>,
}

/// Typed payload of a single card, tagged by card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardContent<'a> {
    Personal(&'a PersonalData),
    Favorites(&'a FavoritesData),
    Music(&'a [TitledItem]),
    Films(&'a [TitledItem]),
}

impl CardContent<'_> {
    /// The card this payload belongs to.
    pub fn card(&self) -> CardId {
        match self {
            Self::Personal(_) => CardId::Personal,
            Self::Favorites(_) => CardId::Favorites,
            Self::Music(_) => CardId::Music,
            Self::Films(_) => CardId::Films,
        }
    }
}

/// A card looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardEntry<'a> {
    /// Whether the card has content.
    pub show_card: bool,
    /// The card's payload.
    pub content: CardContent<'a>,
}

impl Cards {
    /// Look up a card by id.
    pub fn entry(&self, card: CardId) -> CardEntry<'_> {
        match card {
            CardId::Personal => CardEntry {
                show_card: self.personal.show_card,
                content: CardContent::Personal(&self.personal.data),
            },
            CardId::Favorites => CardEntry {
                show_card: self.favorites.show_card,
                content: CardContent::Favorites(&self.favorites.data),
            },
            CardId::Music => CardEntry {
                show_card: self.music.show_card,
                content: CardContent::Music(&self.music.data),
            },
            CardId::Films => CardEntry {
                show_card: self.films.show_card,
                content: CardContent::Films(&self.films.data),
            },
        }
    }
}

impl ProfileDocument {
    /// Decode and validate a document received over the wire.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Whether the owner allows visitors to open `card`.
    pub fn is_visible(&self, card: CardId) -> bool {
        self.user.visible_cards.contains(&card)
    }

    /// A card is unlocked only when it is both visible and has content.
    pub fn is_unlocked(&self, card: CardId) -> bool {
        self.is_visible(card) && self.cards.entry(card).show_card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayse() -> ProfileDocument {
        ProfileDocument {
            user: UserSummary {
                public_slug: "ayse".to_string(),
                visible_cards: vec![CardId::Music],
            },
            cards: Cards {
                music: CardView {
                    show_card: true,
                    data: vec![TitledItem {
                        title: "X".to_string(),
                    }],
                },
                ..Default::default()
            },
        }
    }

    #[test]
    fn serializes_every_key() {
        let json = serde_json::to_value(ayse()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user": { "public_slug": "ayse", "visible_cards": ["music"] },
                "cards": {
                    "personal": { "show_card": false, "data": { "school": null, "zodiac": null } },
                    "favorites": { "show_card": false, "data": { "games": [], "apps": [] } },
                    "music": { "show_card": true, "data": [{ "title": "X" }] },
                    "films": { "show_card": false, "data": [] }
                }
            })
        );
    }

    #[test]
    fn from_json_defaults_missing_visible_cards() {
        let body = r#"{
            "user": { "public_slug": "ghostly" },
            "cards": {
                "personal": { "show_card": false, "data": { "school": null, "zodiac": null } },
                "favorites": { "show_card": false, "data": { "games": [], "apps": [] } },
                "music": { "show_card": false, "data": [] },
                "films": { "show_card": false, "data": [] }
            }
        }"#;
        let doc = ProfileDocument::from_json(body).unwrap();
        assert!(doc.user.visible_cards.is_empty());
    }

    #[test]
    fn from_json_rejects_unknown_card() {
        let mut json = serde_json::to_value(ayse()).unwrap();
        json["user"]["visible_cards"] = serde_json::json!(["music", "pets"]);
        assert!(ProfileDocument::from_json(&json.to_string()).is_err());
    }

    #[test]
    fn from_json_rejects_missing_cards() {
        let body = r#"{"user":{"public_slug":"a","visible_cards":[]}}"#;
        assert!(ProfileDocument::from_json(body).is_err());
    }

    #[test]
    fn entry_is_tagged_by_card() {
        let doc = ayse();
        for card in CardId::ALL {
            assert_eq!(doc.cards.entry(card).content.card(), card);
        }
        match doc.cards.entry(CardId::Music).content {
            CardContent::Music(songs) => assert_eq!(songs[0].title, "X"),
            other => panic!("expected music payload, got {other:?}"),
        }
    }

    #[test]
    fn unlocked_requires_visible_and_content() {
        let mut doc = ayse();
        assert!(doc.is_unlocked(CardId::Music));
        assert!(!doc.is_unlocked(CardId::Personal));

        // Content without permission stays locked.
        doc.cards.films = CardView {
            show_card: true,
            data: vec![TitledItem {
                title: "Y".to_string(),
            }],
        };
        assert!(!doc.is_unlocked(CardId::Films));

        // Permission without content stays locked.
        doc.user.visible_cards.push(CardId::Favorites);
        assert!(!doc.is_unlocked(CardId::Favorites));
    }
}
