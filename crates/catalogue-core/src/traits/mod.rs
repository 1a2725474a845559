//! Core traits defined in `catalogue-core` and implemented by other crates.

pub mod repository;

pub use repository::{Repository, UpdatableRepository};
