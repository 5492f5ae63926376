//! The fixed set of profile cards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier of one of the four profile cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardId {
    /// School and zodiac sign.
    Personal,
    /// Favorite games and apps.
    Favorites,
    /// Favorite songs.
    Music,
    /// Favorite movies.
    Films,
}

impl CardId {
    /// All cards in render order.
    pub const ALL: [CardId; 4] = [
        CardId::Personal,
        CardId::Favorites,
        CardId::Music,
        CardId::Films,
    ];

    /// Wire name used in `visible_cards` and the `cards` object.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Favorites => "favorites",
            Self::Music => "music",
            Self::Films => "films",
        }
    }

    /// Card heading shown to visitors.
    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Kişisel Bilgiler",
            Self::Favorites => "Favoriler",
            Self::Music => "Müzik",
            Self::Films => "Film Sektörü",
        }
    }

    /// Emoji icon shown next to the title.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Personal => "🎓",
            Self::Favorites => "💜",
            Self::Music => "🎵",
            Self::Films => "🎬",
        }
    }

    /// Position in [`CardId::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(Self::Personal),
            "favorites" => Ok(Self::Favorites),
            "music" => Ok(Self::Music),
            "films" => Ok(Self::Films),
            other => Err(Error::UnknownCard(other.to_string())),
        }
    }
}
