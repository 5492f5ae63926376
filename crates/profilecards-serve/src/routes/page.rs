//! Server-rendered profile page.
//!
//! Handles `GET /profile/{slug}`. The page is rendered once from the
//! aggregate document; expanding and collapsing cards happens in the
//! browser without further requests.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use profilecards_core::ProfileView;

use crate::aggregate::aggregate;
use crate::error::{ApiError, PageError};
use crate::render;
use crate::state::AppState;

/// Render the profile page for a slug.
pub async fn profile_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, PageError> {
    let document = aggregate(state.store.as_ref(), Some(slug.as_str())).await?;
    let view = ProfileView::new(document);

    let markup = render::profile::render(&view, &state.config.base_url, &state.config.site_name);

    Ok(build_response(markup.into_string()))
}

/// `GET /profile/` with no slug.
pub async fn missing_slug() -> PageError {
    PageError(ApiError::InvalidSlug)
}

/// Build an HTTP response with HTML content and security headers.
fn build_response(html: String) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    (StatusCode::OK, headers, html).into_response()
}
