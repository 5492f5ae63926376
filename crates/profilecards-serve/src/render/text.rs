//! Plain-text rendering for terminals.
//!
//! Mirrors the HTML page: one line per card with a lock, `+`, or `−`
//! marker, followed by indented content for expanded cards.

use std::fmt::Write;

use profilecards_core::{CardContent, CardState, LOADING_TEXT, ProfileView, TitledItem, ViewState};

use super::components::join_or_dash;

const INDENT: &str = "    ";

/// Render whatever the page currently shows.
pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Loading => format!("{LOADING_TEXT}\n"),
        ViewState::Failed(failure) => format!("{}\n", failure.message),
        ViewState::Ready(view) => render(view),
    }
}

/// Render a loaded profile.
pub fn render(view: &ProfileView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "@{}", view.document().user.public_slug);

    for (card, state) in view.cards() {
        let marker = match state {
            CardState::Locked => "🔒",
            CardState::Collapsed => "+",
            CardState::Expanded => "−",
        };
        let _ = writeln!(out, "{marker} {} {}", card.icon(), card.title());

        if state == CardState::Expanded {
            for line in content_lines(view.document().cards.entry(card).content) {
                let _ = writeln!(out, "{INDENT}{line}");
            }
        }
    }

    out
}

fn content_lines(content: CardContent<'_>) -> Vec<String> {
    match content {
        CardContent::Personal(data) => vec![
            format!("Okul: {}", data.school.as_deref().unwrap_or("-")),
            format!("Burç: {}", data.zodiac.as_deref().unwrap_or("-")),
        ],
        CardContent::Favorites(data) => vec![
            format!(
                "Oyunlar: {}",
                join_or_dash(data.games.iter().map(|g| g.name.as_str()))
            ),
            format!(
                "Uygulamalar: {}",
                join_or_dash(data.apps.iter().map(|a| a.name.as_str()))
            ),
        ],
        CardContent::Music(items) | CardContent::Films(items) => title_lines(items),
    }
}

fn title_lines(items: &[TitledItem]) -> Vec<String> {
    if items.is_empty() {
        return vec!["-".to_string()];
    }
    items.iter().map(|i| format!("• {}", i.title)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilecards_core::{
        CardId, CardView, Cards, Failure, PersonalData, ProfileDocument, UserSummary,
    };

    fn view() -> ProfileView {
        ProfileView::new(ProfileDocument {
            user: UserSummary {
                public_slug: "ayse".to_string(),
                visible_cards: vec![CardId::Music, CardId::Personal],
            },
            cards: Cards {
                personal: CardView {
                    show_card: true,
                    data: PersonalData {
                        school: None,
                        zodiac: Some("Koç".to_string()),
                    },
                },
                music: CardView {
                    show_card: true,
                    data: vec![TitledItem {
                        title: "X".to_string(),
                    }],
                },
                ..Default::default()
            },
        })
    }

    #[test]
    fn collapsed_view() {
        assert_eq!(
            render(&view()),
            "@ayse\n+ 🎓 Kişisel Bilgiler\n🔒 💜 Favoriler\n+ 🎵 Müzik\n🔒 🎬 Film Sektörü\n"
        );
    }

    #[test]
    fn expanded_cards_show_content() {
        let mut v = view();
        v.toggle(CardId::Personal);
        v.toggle(CardId::Music);
        let text = render(&v);
        assert!(text.contains("− 🎓 Kişisel Bilgiler\n    Okul: -\n    Burç: Koç\n"));
        assert!(text.contains("− 🎵 Müzik\n    • X\n"));
    }

    #[test]
    fn loading_and_failed_states() {
        assert_eq!(render_state(&ViewState::Loading), "Yükleniyor...\n");
        let failed = ViewState::Failed(Failure {
            status: Some(404),
            message: "Profil yok veya gizli".to_string(),
        });
        assert_eq!(render_state(&failed), "Profil yok veya gizli\n");
    }
}
