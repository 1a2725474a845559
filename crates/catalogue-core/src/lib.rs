//! # catalogue-core
//!
//! Core crate for the catalogue service. Contains the generic repository
//! trait, configuration schemas, sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other catalogue crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
