//! JSON profile endpoint.
//!
//! `GET /api/profile/{slug}` returns the aggregate profile document.
//! Documents are built fresh on every request and marked `no-store`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;

use crate::aggregate::aggregate;
use crate::error::ApiError;
use crate::state::AppState;

/// Serve the aggregate document for a slug.
pub async fn profile(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let document = aggregate(state.store.as_ref(), Some(slug.as_str())).await?;
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(document)))
}

/// `GET /api/profile` with no slug.
pub async fn missing_slug() -> ApiError {
    ApiError::InvalidSlug
}
