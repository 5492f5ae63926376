//! Renderer-side view state.
//!
//! A [`ProfilePage`] follows the slug supplied by navigation: every slug
//! change drops the previous document and expansion map and waits for a new
//! fetch. Once a document arrives, a [`ProfileView`] tracks each card as
//! locked, collapsed, or expanded. Toggling is purely local.

use crate::card::CardId;
use crate::document::ProfileDocument;
use crate::error::Error;

/// Acknowledgment shown when a visitor tries to open a locked card.
pub const LOCKED_NOTICE: &str = "Bu kartı görmek için giriş yapmalısınız.";

/// Placeholder shown until the document arrives.
pub const LOADING_TEXT: &str = "Yükleniyor...";

/// Message shown for failures the server did not describe.
const GENERIC_FAILURE: &str = "Profil yüklenemedi.";

/// Display state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// Not permitted or empty; never opens for this document.
    Locked,
    /// Unlocked, content hidden.
    Collapsed,
    /// Unlocked, content shown.
    Expanded,
}

/// Result of a toggle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The card opened.
    Expanded,
    /// The card closed.
    Collapsed,
    /// The card is locked; show [`LOCKED_NOTICE`] instead.
    Locked,
}

/// A loaded profile plus the local expand/collapse map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    document: ProfileDocument,
    expanded: [bool; 4],
}

impl ProfileView {
    /// Start a view with every card collapsed.
    pub fn new(document: ProfileDocument) -> Self {
        Self {
            document,
            expanded: [false; 4],
        }
    }

    /// The document backing this view.
    pub fn document(&self) -> &ProfileDocument {
        &self.document
    }

    /// Current state of `card`.
    pub fn state(&self, card: CardId) -> CardState {
        if !self.document.is_unlocked(card) {
            CardState::Locked
        } else if self.expanded[card.index()] {
            CardState::Expanded
        } else {
            CardState::Collapsed
        }
    }

    /// Flip an unlocked card between collapsed and expanded.
    ///
    /// Locked cards are left untouched.
    pub fn toggle(&mut self, card: CardId) -> ToggleOutcome {
        if !self.document.is_unlocked(card) {
            return ToggleOutcome::Locked;
        }
        let slot = &mut self.expanded[card.index()];
        *slot = !*slot;
        if *slot {
            ToggleOutcome::Expanded
        } else {
            ToggleOutcome::Collapsed
        }
    }

    /// Every card with its state, in render order.
    pub fn cards(&self) -> impl Iterator<Item = (CardId, CardState)> + '_ {
        CardId::ALL.into_iter().map(|card| (card, self.state(card)))
    }
}

/// Why a page could not show a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// HTTP status reported by the server, if any.
    pub status: Option<u16>,
    /// Message suitable for visitors.
    pub message: String,
}

impl From<&Error> for Failure {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidSlug(message) => Self {
                status: Some(400),
                message: message.clone(),
            },
            Error::NotFound(message) => Self {
                status: Some(404),
                message: message.clone(),
            },
            Error::Status { status, .. } => Self {
                status: Some(*status),
                message: GENERIC_FAILURE.to_string(),
            },
            _ => Self {
                status: None,
                message: GENERIC_FAILURE.to_string(),
            },
        }
    }
}

/// What the page currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Waiting for the fetch to resolve.
    Loading,
    /// Document loaded.
    Ready(ProfileView),
    /// The fetch failed.
    Failed(Failure),
}

/// A profile page bound to the current navigation slug.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    slug: Option<String>,
    state: ViewState,
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfilePage {
    /// A page with no slug yet; shows the loading placeholder.
    pub fn new() -> Self {
        Self {
            slug: None,
            state: ViewState::Loading,
        }
    }

    /// Slug currently being shown or fetched.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Point the page at `slug`.
    ///
    /// Returns `true` when the caller must fetch the document. Navigating to
    /// the slug already shown keeps the current state.
    pub fn navigate(&mut self, slug: &str) -> bool {
        if self.slug.as_deref() == Some(slug) {
            return false;
        }
        tracing::debug!(slug = %slug, "profile page navigated");
        self.slug = Some(slug.to_string());
        self.state = ViewState::Loading;
        true
    }

    /// Apply the result of fetching `slug`.
    ///
    /// Results for a slug the page has since navigated away from are
    /// dropped; returns whether the result was applied.
    pub fn resolve(&mut self, slug: &str, result: crate::Result<ProfileDocument>) -> bool {
        if self.slug.as_deref() != Some(slug) {
            tracing::debug!(slug = %slug, "dropping stale profile fetch");
            return false;
        }
        self.state = match result {
            Ok(document) => ViewState::Ready(ProfileView::new(document)),
            Err(err) => {
                tracing::debug!(slug = %slug, error = %err, "profile fetch failed");
                ViewState::Failed(Failure::from(&err))
            }
        };
        true
    }

    /// Toggle a card on a loaded page; `None` while loading or failed.
    pub fn toggle(&mut self, card: CardId) -> Option<ToggleOutcome> {
        match &mut self.state {
            ViewState::Ready(view) => Some(view.toggle(card)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CardView, Cards, NamedItem, PersonalData, TitledItem, UserSummary};

    fn document(visible: &[CardId]) -> ProfileDocument {
        ProfileDocument {
            user: UserSummary {
                public_slug: "ayse".to_string(),
                visible_cards: visible.to_vec(),
            },
            cards: Cards {
                personal: CardView {
                    show_card: true,
                    data: PersonalData {
                        school: Some("ODTÜ".to_string()),
                        zodiac: None,
                    },
                },
                favorites: CardView::default(),
                music: CardView {
                    show_card: true,
                    data: vec![TitledItem {
                        title: "X".to_string(),
                    }],
                },
                films: CardView::default(),
            },
        }
    }

    #[test]
    fn initial_states_follow_unlock_rule() {
        let view = ProfileView::new(document(&[CardId::Music, CardId::Favorites]));
        let states: Vec<_> = view.cards().collect();
        assert_eq!(
            states,
            vec![
                // has content, not visible
                (CardId::Personal, CardState::Locked),
                // visible, no content
                (CardId::Favorites, CardState::Locked),
                (CardId::Music, CardState::Collapsed),
                // neither
                (CardId::Films, CardState::Locked),
            ]
        );
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut view = ProfileView::new(document(&[CardId::Music]));
        assert_eq!(view.toggle(CardId::Music), ToggleOutcome::Expanded);
        assert_eq!(view.state(CardId::Music), CardState::Expanded);
        assert_eq!(view.toggle(CardId::Music), ToggleOutcome::Collapsed);
        assert_eq!(view.state(CardId::Music), CardState::Collapsed);
    }

    #[test]
    fn toggle_locked_card_never_changes_state() {
        let mut view = ProfileView::new(document(&[CardId::Music]));
        let before = view.clone();
        for _ in 0..3 {
            assert_eq!(view.toggle(CardId::Personal), ToggleOutcome::Locked);
        }
        assert_eq!(view, before);
    }

    #[test]
    fn toggles_are_independent() {
        let mut view = ProfileView::new(document(&[CardId::Music, CardId::Personal]));
        view.toggle(CardId::Personal);
        assert_eq!(view.state(CardId::Personal), CardState::Expanded);
        assert_eq!(view.state(CardId::Music), CardState::Collapsed);
    }

    #[test]
    fn page_starts_loading() {
        let page = ProfilePage::new();
        assert_eq!(page.state(), &ViewState::Loading);
        assert_eq!(page.slug(), None);
    }

    #[test]
    fn navigate_requests_fetch_once_per_slug() {
        let mut page = ProfilePage::new();
        assert!(page.navigate("ayse"));
        assert!(!page.navigate("ayse"));
        assert!(page.navigate("mehmet"));
    }

    #[test]
    fn slug_change_resets_expansion() {
        let mut page = ProfilePage::new();
        page.navigate("ayse");
        assert!(page.resolve("ayse", Ok(document(&[CardId::Music]))));
        assert_eq!(page.toggle(CardId::Music), Some(ToggleOutcome::Expanded));

        page.navigate("mehmet");
        assert_eq!(page.state(), &ViewState::Loading);
        assert_eq!(page.toggle(CardId::Music), None);

        page.resolve("mehmet", Ok(document(&[CardId::Music])));
        match page.state() {
            ViewState::Ready(view) => assert_eq!(view.state(CardId::Music), CardState::Collapsed),
            other => panic!("expected ready, got {other:?}"),
        }
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut page = ProfilePage::new();
        page.navigate("ayse");
        page.navigate("mehmet");
        assert!(!page.resolve("ayse", Ok(document(&[]))));
        assert_eq!(page.state(), &ViewState::Loading);
    }

    #[test]
    fn not_found_becomes_failed_state() {
        let mut page = ProfilePage::new();
        page.navigate("ghost");
        page.resolve(
            "ghost",
            Err(Error::NotFound("Profil yok veya gizli".to_string())),
        );
        assert_eq!(
            page.state(),
            &ViewState::Failed(Failure {
                status: Some(404),
                message: "Profil yok veya gizli".to_string(),
            })
        );
    }

    #[test]
    fn unexpected_status_uses_generic_message() {
        let failure = Failure::from(&Error::Status {
            status: 502,
            message: "Bad Gateway".to_string(),
        });
        assert_eq!(failure.status, Some(502));
        assert_eq!(failure.message, GENERIC_FAILURE);
    }

    #[test]
    fn favorites_unlock_with_only_apps() {
        let mut doc = document(&[CardId::Favorites]);
        doc.cards.favorites = CardView {
            show_card: true,
            data: crate::document::FavoritesData {
                games: vec![],
                apps: vec![NamedItem {
                    name: "Notion".to_string(),
                }],
            },
        };
        let view = ProfileView::new(doc);
        assert_eq!(view.state(CardId::Favorites), CardState::Collapsed);
    }
}
