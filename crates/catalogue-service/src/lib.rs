//! # catalogue-service
//!
//! Services sitting between the HTTP layer and the repositories. They stamp
//! server-side timestamps, apply field merges on update and hash passwords;
//! persistence rules live in `catalogue-database`.

pub mod account;
pub mod catalogue;
mod names;

pub use account::{AccountService, LoginSession};
pub use catalogue::CatalogueService;
