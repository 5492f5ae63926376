//! Error types for the aggregator and their HTTP mapping.
//!
//! The JSON API answers `{ "error": "..." }` with no further fields. A slug
//! that exists but is private, a slug that does not exist, and a failed
//! profile lookup all produce the same 404 body, so responses never reveal
//! whether a private profile exists.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};
use serde::Serialize;

/// Message returned for a missing or blank slug.
pub const INVALID_SLUG_MESSAGE: &str = "Geçersiz slug";

/// Message returned when no public profile matches.
pub const NOT_FOUND_MESSAGE: &str = "Profil yok veya gizli";

/// Request-terminating aggregator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The slug was missing or blank.
    #[error("invalid slug")]
    InvalidSlug,

    /// No single public profile matched the slug.
    #[error("profile not found or private")]
    NotFound,
}

impl ApiError {
    /// HTTP status and visitor-facing message.
    pub fn status_and_message(self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidSlug => (StatusCode::BAD_REQUEST, INVALID_SLUG_MESSAGE),
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// An [`ApiError`] raised while serving the HTML profile page.
///
/// Rendered as a simple HTML error page with the same status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(transparent)]
pub struct PageError(#[from] pub ApiError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        let title = match self.0 {
            ApiError::InvalidSlug => "Geçersiz Bağlantı",
            ApiError::NotFound => "Profil Bulunamadı",
        };

        let markup = html! {
            (DOCTYPE)
            html lang="tr" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
