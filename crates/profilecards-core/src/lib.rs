//! Core types shared by the profile card aggregator and its renderers.
//!
//! This crate provides:
//! - The fixed set of profile cards and their display metadata
//! - The aggregate profile document exchanged over `GET /api/profile/{slug}`
//! - The per-card locked/collapsed/expanded view state machine
//! - An HTTP client that fetches the aggregate document
//! - Shared error types

mod card;
pub mod client;
pub mod document;
mod error;
pub mod view;

pub use card::CardId;
pub use client::ProfileClient;
pub use document::{
    CardContent, CardEntry, CardView, Cards, FavoritesData, NamedItem, PersonalData,
    ProfileDocument, TitledItem, UserSummary,
};
pub use error::{Error, Result};
pub use view::{
    CardState, Failure, LOADING_TEXT, LOCKED_NOTICE, ProfilePage, ProfileView, ToggleOutcome,
    ViewState,
};
