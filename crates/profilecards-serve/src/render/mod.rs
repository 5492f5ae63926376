//! Rendering for profile pages: HTML for browsers, plain text for terminals.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic escaping of dynamic values.

pub mod components;
pub mod profile;
pub mod text;
