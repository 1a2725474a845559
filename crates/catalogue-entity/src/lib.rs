//! # catalogue-entity
//!
//! Domain entity models for the catalogue service. Every struct in this
//! crate represents a database table row or the data needed to insert one.
//! Row structs derive `sqlx::FromRow` and serialize with camelCase field
//! names; foreign keys are exposed as plain ids named after the parent.
//!
//! Ownership runs one way only: children carry their parent's id and
//! parents never embed child collections.

pub mod catalogue;
pub mod download;
pub mod session;
pub mod user;

pub use catalogue::{Category, Item, Named, NewCategory, NewItem, NewSubcategory, Subcategory};
pub use download::{Download, NewDownload};
pub use session::{NewSession, Session};
pub use user::{NewUser, User};

/// Maximum length of names and usernames.
pub const MAX_NAME_LENGTH: usize = 80;

/// Length of a session token.
pub const TOKEN_LENGTH: usize = 32;
