//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use catalogue_core::config::AppConfig;
use catalogue_database::DatabasePool;
use catalogue_database::repositories::{
    CategoryRepository, DownloadRepository, ItemRepository, SessionRepository,
    SubcategoryRepository, UserRepository,
};
use catalogue_service::{AccountService, CatalogueService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Category, subcategory, item and download operations
    pub catalogue: Arc<CatalogueService>,
    /// Users, login and tokens
    pub accounts: Arc<AccountService>,
}

impl AppState {
    /// Wire repositories and services on top of an open pool.
    pub fn new(config: Arc<AppConfig>, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
        let subcategory_repo = Arc::new(SubcategoryRepository::new(pool.clone()));
        let item_repo = Arc::new(ItemRepository::new(pool.clone()));
        let download_repo = Arc::new(DownloadRepository::new(pool.clone()));
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(pool));

        let catalogue = Arc::new(CatalogueService::new(
            category_repo,
            subcategory_repo,
            item_repo,
            download_repo,
        ));
        let accounts = Arc::new(AccountService::new(user_repo, session_repo));

        Self {
            config,
            db,
            catalogue,
            accounts,
        }
    }
}
