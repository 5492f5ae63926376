//! HTTP client for `GET /api/profile/{slug}`.

use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::document::ProfileDocument;
use crate::error::{Error, Result};

/// Error body returned with 4xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Fetches aggregate profile documents from a profilecards server.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ProfileClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:8081`).
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|_| Error::BaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::BaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// URL of the profile document for `slug`, with the slug encoded as one
    /// path segment.
    pub fn profile_url(&self, slug: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "profile", slug]);
        Ok(url)
    }

    /// Fetch and validate the profile document for `slug`.
    pub async fn fetch(&self, slug: &str) -> Result<ProfileDocument> {
        let url = self.profile_url(slug)?;
        tracing::debug!(url = %url, "fetching profile");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return ProfileDocument::from_json(&body);
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });

        Err(match status {
            StatusCode::BAD_REQUEST => Error::InvalidSlug(message),
            StatusCode::NOT_FOUND => Error::NotFound(message),
            other => Error::Status {
                status: other.as_u16(),
                message,
            },
        })
    }
}
