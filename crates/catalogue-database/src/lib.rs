//! # catalogue-database
//!
//! SQLite connection management, migrations, and concrete repository
//! implementations for every catalogue entity.
//!
//! All repositories share the routines in [`crud`]: a row type describes its
//! table once through [`crud::Table`] and gets load/merge/save, cascading
//! delete and ordered listing for free.

pub mod connection;
pub mod crud;
pub mod error;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{
    CategoryRepository, DownloadRepository, ItemRepository, SessionRepository,
    SubcategoryRepository, UserRepository,
};
