//! Profile page renderer.
//!
//! Renders the `@slug` header and the four cards in fixed order. Each card
//! is drawn from its [`CardState`]:
//! - locked: icon, title, and a lock; clicking shows [`LOCKED_NOTICE`]
//! - collapsed / expanded: a `<details>` element with a +/− toggle

use maud::{Markup, PreEscaped, html};
use profilecards_core::{CardContent, CardId, CardState, LOCKED_NOTICE, ProfileView, TitledItem};
use url::Url;

use super::components::{ICON_LOCK, alert_handler, alert_key_handler, join_or_dash, page_shell};

/// Render a profile page for a loaded view.
pub fn render(view: &ProfileView, base_url: &str, site_name: &str) -> Markup {
    let slug = view.document().user.public_slug.as_str();
    let title = format!("@{slug}");
    let description = format!("{slug} profil kartları");
    let canonical = canonical_url(base_url, slug);

    let body = html! {
        div class="slug" { "@" (slug) }
        @for (card, state) in view.cards() {
            (card_markup(view, card, state))
        }
    };

    page_shell(&title, &description, canonical.as_deref(), body, site_name)
}

/// `{base_url}/profile/{slug}` with the slug encoded as one path segment.
/// `None` when the base URL cannot carry a path.
fn canonical_url(base_url: &str, slug: &str) -> Option<String> {
    let mut url = match Url::parse(base_url) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(base_url, error = %err, "invalid base url, omitting canonical link");
            return None;
        }
    };
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(["profile", slug]);
    Some(url.into())
}

fn card_heading(card: CardId) -> Markup {
    html! {
        span class="card-title" {
            span class="card-icon" { (card.icon()) }
            (card.title())
        }
    }
}

fn card_markup(view: &ProfileView, card: CardId, state: CardState) -> Markup {
    match state {
        CardState::Locked => html! {
            div class="card locked" id=(card.as_str()) role="button" tabindex="0"
                onclick=(alert_handler(LOCKED_NOTICE))
                onkeydown=(alert_key_handler(LOCKED_NOTICE)) title=(LOCKED_NOTICE) {
                div class="card-head" {
                    (card_heading(card))
                    (PreEscaped(ICON_LOCK))
                }
            }
        },
        CardState::Collapsed | CardState::Expanded => html! {
            details class="card" id=(card.as_str()) open[state == CardState::Expanded] {
                summary class="card-head" {
                    (card_heading(card))
                    span class="toggle" aria-hidden="true" {}
                }
                div class="card-content" {
                    (card_content(view.document().cards.entry(card).content))
                }
            }
        },
    }
}

fn card_content(content: CardContent<'_>) -> Markup {
    match content {
        CardContent::Personal(data) => html! {
            p { strong { "Okul:" } " " (data.school.as_deref().unwrap_or("-")) }
            p { strong { "Burç:" } " " (data.zodiac.as_deref().unwrap_or("-")) }
        },
        CardContent::Favorites(data) => html! {
            p {
                strong { "Oyunlar:" } " "
                (join_or_dash(data.games.iter().map(|g| g.name.as_str())))
            }
            p {
                strong { "Uygulamalar:" } " "
                (join_or_dash(data.apps.iter().map(|a| a.name.as_str())))
            }
        },
        CardContent::Music(items) | CardContent::Films(items) => title_list(items),
    }
}

fn title_list(items: &[TitledItem]) -> Markup {
    html! {
        @if items.is_empty() {
            p { "-" }
        } @else {
            ul class="item-list" {
                @for item in items {
                    li { (item.title) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilecards_core::{
        CardView, Cards, FavoritesData, NamedItem, PersonalData, ProfileDocument, UserSummary,
    };

    fn view(visible: &[CardId]) -> ProfileView {
        ProfileView::new(ProfileDocument {
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
                favorites: CardView {
                    show_card: true,
                    data: FavoritesData {
                        games: vec![
                            NamedItem {
                                name: "Tetris".to_string(),
                            },
                            NamedItem {
                                name: "Chess".to_string(),
                            },
                        ],
                        apps: vec![],
                    },
                },
                music: CardView {
                    show_card: true,
                    data: vec![TitledItem {
                        title: "X".to_string(),
                    }],
                },
                films: CardView::default(),
            },
        })
    }

    fn render_html(view: &ProfileView) -> String {
        render(view, "https://kart.example", "Kartlar").into_string()
    }

    #[test]
    fn renders_slug_and_all_cards_in_order() {
        let html = render_html(&view(&[]));
        assert!(html.contains("@ayse"));
        let positions: Vec<_> = CardId::ALL
            .iter()
            .map(|c| html.find(c.title()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn locked_cards_hide_content() {
        let html = render_html(&view(&[]));
        assert_eq!(html.matches("card locked").count(), 4);
        assert!(!html.contains("ODTÜ"));
        assert!(!html.contains("<details"));
        assert!(html.contains("alert("));
        assert_eq!(html.matches("onkeydown=").count(), 4);
        assert!(html.contains("event.key==='Enter'"));
    }

    #[test]
    fn canonical_url_encodes_slug() {
        assert_eq!(
            canonical_url("https://kart.example", "a b/c").as_deref(),
            Some("https://kart.example/profile/a%20b%2Fc")
        );
        assert_eq!(
            canonical_url("https://kart.example/kartlar", "ayse").as_deref(),
            Some("https://kart.example/kartlar/profile/ayse")
        );
        assert_eq!(canonical_url("not a url", "ayse"), None);
    }

    #[test]
    fn canonical_link_uses_encoded_slug() {
        let mut doc = view(&[]).document().clone();
        doc.user.public_slug = "a b".to_string();
        let html = render_html(&ProfileView::new(doc));
        assert!(html.contains(r#"rel="canonical" href="https://kart.example/profile/a%20b""#));
    }

    #[test]
    fn unlocked_cards_render_details() {
        let html = render_html(&view(&[CardId::Music, CardId::Personal]));
        assert_eq!(html.matches("<details").count(), 2);
        assert_eq!(html.matches("card locked").count(), 2);
        assert!(html.contains("ODTÜ"));
        assert!(html.contains("<li>X</li>"));
        // Collapsed by default.
        assert!(!html.contains(" open>"));
    }

    #[test]
    fn expanded_card_is_open() {
        let mut v = view(&[CardId::Music]);
        v.toggle(CardId::Music);
        let html = render_html(&v);
        assert!(html.contains(r#"<details class="card" id="music" open>"#));
    }

    #[test]
    fn personal_falls_back_to_dash() {
        let html = render_html(&view(&[CardId::Personal]));
        assert!(html.contains("<strong>Burç:</strong> -"));
    }

    #[test]
    fn favorites_joined_with_commas() {
        let html = render_html(&view(&[CardId::Favorites]));
        assert!(html.contains("Tetris, Chess"));
        assert!(html.contains("<strong>Uygulamalar:</strong> -"));
    }

    #[test]
    fn dynamic_values_are_escaped() {
        let mut doc = view(&[CardId::Music]).document().clone();
        doc.cards.music.data[0].title = "<b>bold</b>".to_string();
        let html = render_html(&ProfileView::new(doc));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
