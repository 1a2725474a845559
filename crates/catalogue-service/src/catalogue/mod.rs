//! Category, subcategory, item and download operations.

pub mod search;
pub mod service;

pub use search::{SearchResults, SearchTarget};
pub use service::CatalogueService;
