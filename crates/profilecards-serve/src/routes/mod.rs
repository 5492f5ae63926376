//! Route definitions for the profile service.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /api/profile/{slug}` - Aggregate profile document (JSON)
//! - `GET /profile/{slug}` - Profile page (HTML)
//!
//! Requests without a slug (`/api/profile`, `/api/profile/`, `/profile/`)
//! answer 400.

mod api;
mod health;
mod page;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete profile service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/api/profile", get(api::missing_slug))
        .route("/api/profile/", get(api::missing_slug))
        .route("/api/profile/{slug}", get(api::profile))
        .route("/profile/", get(page::missing_slug))
        .route("/profile/{slug}", get(page::profile_page))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
