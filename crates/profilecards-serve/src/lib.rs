//! Profilecards Serve - public profile cards over HTTP.
//!
//! Resolves a public slug to a user, gathers personal details and favorite
//! collections, and serves them as a single document plus a rendered page.
//!
//! # Architecture
//!
//! - **Store**: [`ProfileStore`] read contract with ClickHouse and in-memory backends
//! - **Aggregate**: Slug validation, parallel secondary reads, card derivation
//! - **Render**: HTML profile page using maud (compile-time templates)
//!
//! # URL Pattern
//!
//! ```text
//! GET /api/profile/{slug}   -> JSON document
//! GET /profile/{slug}       -> HTML page
//! ```
//!
//! # Privacy
//!
//! Unknown slugs, private profiles, and failed profile lookups all answer
//! the same 404 body, so the API never reveals that a private profile exists.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{ApiError, PageError};
pub use routes::router;
pub use state::AppState;
pub use store::{ClickHouseStore, MemoryStore, ProfileStore};
