//! Custom Axum extractors.
//!
//! Each one rejects with an [`ApiError`](crate::error::ApiError), so a bad
//! body, path segment or header still produces the envelope.

pub mod auth;
pub mod json;
pub mod path;

pub use auth::BearerToken;
pub use json::ValidatedJson;
pub use path::ValidPath;
