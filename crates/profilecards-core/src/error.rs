//! Error types for the profile card contract and client.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or fetching a profile document.
#[derive(Error, Debug)]
pub enum Error {
    /// A card name outside the fixed card set.
    #[error("unknown card '{0}'")]
    UnknownCard(String),

    /// The server rejected the slug (HTTP 400).
    #[error("invalid slug: {0}")]
    InvalidSlug(String),

    /// No public profile exists for the slug (HTTP 404).
    #[error("profile not found: {0}")]
    NotFound(String),

    /// The server answered with an unexpected status.
    #[error("unexpected status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message from the body, or the canonical reason.
        message: String,
    },

    /// The configured base URL cannot carry a path.
    #[error("invalid base URL '{0}'")]
    BaseUrl(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the document contract.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}
