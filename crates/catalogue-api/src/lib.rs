//! # catalogue-api
//!
//! HTTP API layer for the catalogue built on Axum.
//!
//! Every endpoint answers with the `{ error, message, data }` envelope;
//! failures are turned into that envelope by [`error::ApiError`].

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
