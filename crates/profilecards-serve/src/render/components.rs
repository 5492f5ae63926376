//! Shared HTML components for profile pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for profile pages.
///
/// Card toggling uses `<details>`, so expanding and collapsing needs no
/// script and no network round trip.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f8f4fc;--fg:#111;--fg2:#374151;--fg3:#9ca3af;--accent:#9333ea;--surface:#fff;--locked:#f3f4f6;--border:rgba(147,51,234,.15)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:3rem 1rem;background:linear-gradient(135deg,#f3e8ff,var(--bg),#f3e8ff)}
main{max-width:24rem;width:100%;background:var(--bg);border-radius:12px;padding:1rem;display:flex;flex-direction:column;align-items:center;gap:1.5rem}
.slug{background:#e5e7eb;padding:.5rem 1.25rem;border-radius:999px;font-weight:700;font-size:1.1rem}
.card{width:100%;border:1px solid var(--border);border-radius:12px;box-shadow:0 2px 6px rgba(0,0,0,.08);background:var(--surface);padding:.75rem 0;transition:padding .3s}
.card[open]{padding:1rem 0}
.card.locked{background:var(--locked);opacity:.6;cursor:pointer}
.card-head{display:flex;align-items:center;justify-content:space-between;padding:0 1rem;cursor:pointer;list-style:none;user-select:none}
.card-head::-webkit-details-marker{display:none}
.card-title{display:flex;align-items:center;gap:.5rem;font-weight:600;color:var(--fg2)}
.card-icon{font-size:1.25rem}
.toggle{color:var(--accent);font-weight:700;font-size:1.25rem}
.toggle::after{content:"+"}
.card[open] .toggle::after{content:"\2212"}
.card-content{padding:.75rem 1rem 0;font-size:.9rem;color:var(--fg2);display:flex;flex-direction:column;gap:.5rem}
.card[open] .card-content{animation:reveal .3s ease}
.item-list{padding-left:1.25rem}
svg.icon{width:20px;height:20px;fill:var(--fg3)}
.footer{margin-top:1.5rem;font-size:.8rem;color:var(--fg3)}
@keyframes reveal{from{opacity:0;transform:translateY(-4px)}to{opacity:1;transform:none}}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#f8f4fc;color:#1a1a2e;padding:1rem}
.error-page{text-align:center;max-width:28rem}
.error-page h1{font-size:1.5rem;margin-bottom:.5rem}
"#;

/// Content-Security-Policy header value.
///
/// Inline styles, plus inline handlers for the locked-card notice.
/// No external resources.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src data:; form-action 'none'; frame-ancestors 'none'";

/// Lock icon (Phosphor lock, fill)
pub const ICON_LOCK: &str = r#"<svg class="icon" viewBox="0 0 256 256"><path d="M208,80H176V56a48,48,0,0,0-96,0V80H48A16,16,0,0,0,32,96V208a16,16,0,0,0,16,16H208a16,16,0,0,0,16-16V96A16,16,0,0,0,208,80ZM96,56a32,32,0,0,1,64,0V80H96Zm45.66,100.66A8,8,0,0,1,136,159.13V176a8,8,0,0,1-16,0V159.13a8,8,0,1,1,21.66-2.47Z"/></svg>"#;

/// Render the full HTML page shell with `<head>`, OG tags, and body content.
pub fn page_shell(
    title: &str,
    description: &str,
    canonical_url: Option<&str>,
    body_content: Markup,
    site_name: &str,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="tr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                @if let Some(url) = canonical_url {
                    link rel="canonical" href=(url);
                }

                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                @if let Some(url) = canonical_url {
                    meta property="og:url" content=(url);
                }
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content="profile";

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
                footer class="footer" { (site_name) }
            }
        }
    }
}

/// Join display values with ", ", or "-" when there are none.
pub fn join_or_dash<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let joined = values.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

/// Inline handler that shows `message` in a blocking alert.
pub fn alert_handler(message: &str) -> String {
    // JSON string literals are valid JS string literals.
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    format!("alert({literal})")
}

/// Keyboard counterpart of [`alert_handler`] for `role="button"` elements:
/// Enter and Space show the alert.
pub fn alert_key_handler(message: &str) -> String {
    format!(
        "if(event.key==='Enter'||event.key===' '){{event.preventDefault();{}}}",
        alert_handler(message)
    )
}
