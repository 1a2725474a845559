//! Concrete repository implementations for all catalogue entities.

pub mod category;
pub mod download;
pub mod item;
pub mod session;
pub mod subcategory;
pub mod user;

pub use category::CategoryRepository;
pub use download::DownloadRepository;
pub use item::ItemRepository;
pub use session::SessionRepository;
pub use subcategory::SubcategoryRepository;
pub use user::UserRepository;
