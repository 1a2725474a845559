//! Catalogue CRUD operations.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use catalogue_core::error::AppError;
use catalogue_core::traits::{Repository, UpdatableRepository};
use catalogue_core::types::SortField;
use catalogue_database::repositories::{
    CategoryRepository, DownloadRepository, ItemRepository, SubcategoryRepository,
};
use catalogue_entity::{
    Category, Download, Item, Named, NewCategory, NewDownload, NewItem, NewSubcategory,
    Subcategory,
};

use super::search::{SearchResults, SearchTarget};
use crate::names;

/// Manages the category → subcategory → item hierarchy and downloads.
#[derive(Debug, Clone)]
pub struct CatalogueService {
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
    /// Subcategory repository.
    subcategory_repo: Arc<SubcategoryRepository>,
    /// Item repository.
    item_repo: Arc<ItemRepository>,
    /// Download repository.
    download_repo: Arc<DownloadRepository>,
}

impl CatalogueService {
    /// Creates a new catalogue service.
    pub fn new(
        category_repo: Arc<CategoryRepository>,
        subcategory_repo: Arc<SubcategoryRepository>,
        item_repo: Arc<ItemRepository>,
        download_repo: Arc<DownloadRepository>,
    ) -> Self {
        Self {
            category_repo,
            subcategory_repo,
            item_repo,
            download_repo,
        }
    }

    // ── Items ────────────────────────────────────────────────────────

    /// Lists every item.
    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        self.item_repo.find_all().await
    }

    /// Lists every item in the requested order.
    pub async fn list_items_sorted(&self, sort: SortField) -> Result<Vec<Item>, AppError> {
        self.item_repo.find_all_sorted(sort).await
    }

    /// Lists the items of a subcategory.
    pub async fn items_of(&self, subcategory_id: i64) -> Result<Vec<Item>, AppError> {
        self.item_repo.find_by_subcategory(subcategory_id).await
    }

    /// Creates an item under an existing subcategory.
    pub async fn create_item(&self, name: String, subcategory_id: i64) -> Result<Item, AppError> {
        let item = self
            .item_repo
            .create(&NewItem {
                name: names::checked("Name", name)?,
                subcategory_id,
                created_at: Utc::now(),
            })
            .await?;

        info!(item_id = item.id, subcategory_id, name = %item.name, "Item created");
        Ok(item)
    }

    /// Replaces an item's name. `None` when the item does not exist.
    pub async fn update_item(&self, id: i64, name: String) -> Result<Option<Item>, AppError> {
        let name = names::checked("Name", name)?;
        let updated = rename::<_, Item, NewItem>(self.item_repo.as_ref(), id, name).await?;
        if let Some(item) = &updated {
            info!(item_id = item.id, name = %item.name, "Item renamed");
        }
        Ok(updated)
    }

    /// Deletes an item and its downloads. `None` when the item does not exist.
    pub async fn delete_item(&self, id: i64) -> Result<Option<Item>, AppError> {
        let removed = self.item_repo.remove(id).await?;
        if removed.is_some() {
            info!(item_id = id, "Item deleted");
        }
        Ok(removed)
    }

    // ── Categories ───────────────────────────────────────────────────

    /// Lists every category.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.category_repo.find_all().await
    }

    /// Creates a category.
    pub async fn create_category(&self, name: String) -> Result<Category, AppError> {
        let category = self
            .category_repo
            .create(&NewCategory {
                name: names::checked("Name", name)?,
                created_at: Utc::now(),
            })
            .await?;

        info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Replaces a category's name. `None` when the category does not exist.
    pub async fn update_category(
        &self,
        id: i64,
        name: String,
    ) -> Result<Option<Category>, AppError> {
        let name = names::checked("Name", name)?;
        let updated =
            rename::<_, Category, NewCategory>(self.category_repo.as_ref(), id, name).await?;
        if let Some(category) = &updated {
            info!(category_id = category.id, name = %category.name, "Category renamed");
        }
        Ok(updated)
    }

    /// Deletes a category with all its subcategories, items and their
    /// downloads. `None` when the category does not exist.
    pub async fn delete_category(&self, id: i64) -> Result<Option<Category>, AppError> {
        let removed = self.category_repo.remove(id).await?;
        if removed.is_some() {
            info!(category_id = id, "Category deleted");
        }
        Ok(removed)
    }

    // ── Subcategories ────────────────────────────────────────────────

    /// Lists the subcategories of a category.
    pub async fn subcategories_of(&self, category_id: i64) -> Result<Vec<Subcategory>, AppError> {
        self.subcategory_repo.find_by_category(category_id).await
    }

    /// Creates a subcategory under an existing category.
    pub async fn create_subcategory(
        &self,
        name: String,
        category_id: i64,
    ) -> Result<Subcategory, AppError> {
        let subcategory = self
            .subcategory_repo
            .create(&NewSubcategory {
                name: names::checked("Name", name)?,
                category_id,
                created_at: Utc::now(),
            })
            .await?;

        info!(
            subcategory_id = subcategory.id,
            category_id,
            name = %subcategory.name,
            "Subcategory created"
        );
        Ok(subcategory)
    }

    /// Replaces a subcategory's name. `None` when it does not exist.
    pub async fn update_subcategory(
        &self,
        id: i64,
        name: String,
    ) -> Result<Option<Subcategory>, AppError> {
        let name = names::checked("Name", name)?;
        let updated =
            rename::<_, Subcategory, NewSubcategory>(self.subcategory_repo.as_ref(), id, name)
                .await?;
        if let Some(subcategory) = &updated {
            info!(
                subcategory_id = subcategory.id,
                name = %subcategory.name,
                "Subcategory renamed"
            );
        }
        Ok(updated)
    }

    /// Deletes a subcategory with its items and their downloads.
    pub async fn delete_subcategory(&self, id: i64) -> Result<Option<Subcategory>, AppError> {
        let removed = self.subcategory_repo.remove(id).await?;
        if removed.is_some() {
            info!(subcategory_id = id, "Subcategory deleted");
        }
        Ok(removed)
    }

    // ── Search ───────────────────────────────────────────────────────

    /// Finds rows of `target` whose name starts with `prefix`.
    pub async fn search(
        &self,
        target: SearchTarget,
        prefix: &str,
    ) -> Result<SearchResults, AppError> {
        Ok(match target {
            SearchTarget::Category => {
                SearchResults::Categories(self.category_repo.find_by_name_prefix(prefix).await?)
            }
            SearchTarget::Subcategory => SearchResults::Subcategories(
                self.subcategory_repo.find_by_name_prefix(prefix).await?,
            ),
            SearchTarget::Item => {
                SearchResults::Items(self.item_repo.find_by_name_prefix(prefix).await?)
            }
        })
    }

    // ── Downloads ────────────────────────────────────────────────────

    /// Records that a user downloaded an item.
    pub async fn record_download(&self, user_id: i64, item_id: i64) -> Result<Download, AppError> {
        let download = self
            .download_repo
            .create(&NewDownload {
                user_id,
                item_id,
                created_at: Utc::now(),
            })
            .await?;

        info!(download_id = download.id, user_id, item_id, "Download recorded");
        Ok(download)
    }

    /// Lists the downloads of an item.
    pub async fn downloads_of_item(&self, item_id: i64) -> Result<Vec<Download>, AppError> {
        self.download_repo.find_by_item(item_id).await
    }

    /// Lists the downloads made by a user.
    pub async fn downloads_of_user(&self, user_id: i64) -> Result<Vec<Download>, AppError> {
        self.download_repo.find_by_user(user_id).await
    }
}

/// Load, overwrite the name and save, all through the generic repository.
async fn rename<R, E, D>(repo: &R, id: i64, name: String) -> Result<Option<E>, AppError>
where
    R: UpdatableRepository<E, D>,
    E: Named + Serialize + Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    repo.modify(id, move |row: &mut E| row.rename(name)).await
}

#[cfg(test)]
mod tests {
    use catalogue_core::config::DatabaseConfig;
    use catalogue_core::error::ErrorKind;
    use catalogue_core::types::OrderField;
    use catalogue_database::DatabasePool;
    use catalogue_database::migration::run_migrations;

    use super::*;

    async fn service() -> CatalogueService {
        let db = DatabasePool::in_memory().await.unwrap();
        run_migrations(db.pool()).await.unwrap();
        let pool = db.pool().clone();
        CatalogueService::new(
            Arc::new(CategoryRepository::new(pool.clone())),
            Arc::new(SubcategoryRepository::new(pool.clone())),
            Arc::new(ItemRepository::new(pool.clone())),
            Arc::new(DownloadRepository::new(pool)),
        )
    }

    #[tokio::test]
    async fn test_games_action_zelda_scenario() {
        let svc = service().await;

        let games = svc.create_category("Games".to_string()).await.unwrap();
        assert_eq!(games.id, 1);
        let action = svc
            .create_subcategory("Action".to_string(), games.id)
            .await
            .unwrap();
        let zelda = svc.create_item("Zelda".to_string(), action.id).await.unwrap();

        let names: Vec<String> = svc
            .list_items_sorted(SortField::asc(OrderField::Name))
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Zelda"]);

        let removed = svc.delete_category(games.id).await.unwrap().unwrap();
        assert_eq!(removed.name, "Games");
        assert!(svc.subcategories_of(games.id).await.unwrap().is_empty());
        assert!(svc.items_of(action.id).await.unwrap().is_empty());
        assert!(svc.delete_item(zelda.id).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_renames_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = DatabasePool::connect(&DatabaseConfig {
            url: format!("sqlite://{}/catalogue.db", dir.path().display()),
            max_connections: 10,
            ..DatabaseConfig::default()
        })
        .await
        .unwrap();
        run_migrations(db.pool()).await.unwrap();
        let pool = db.pool().clone();
        let svc = Arc::new(CatalogueService::new(
            Arc::new(CategoryRepository::new(pool.clone())),
            Arc::new(SubcategoryRepository::new(pool.clone())),
            Arc::new(ItemRepository::new(pool.clone())),
            Arc::new(DownloadRepository::new(pool)),
        ));
        let games = svc.create_category("Games".to_string()).await.unwrap();

        let handles: Vec<_> = (0..40)
            .map(|i| {
                let svc = Arc::clone(&svc);
                tokio::spawn(async move { svc.update_category(games.id, format!("G{i}")).await })
            })
            .collect();

        let mut names = Vec::new();
        for handle in handles {
            let renamed = handle.await.unwrap().unwrap().unwrap();
            names.push(renamed.name);
        }

        let stored = svc.list_categories().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(names.contains(&stored[0].name));
        db.close().await;
    }

    #[tokio::test]
    async fn test_names_are_trimmed_before_uniqueness() {
        let svc = service().await;
        let games = svc.create_category("  Games ".to_string()).await.unwrap();
        assert_eq!(games.name, "Games");

        let err = svc.create_category(" Games".to_string()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(svc.list_categories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_category_is_none() {
        let svc = service().await;
        let result = svc.update_category(999, "X".to_string()).await.unwrap();
        assert!(result.is_none());
        assert!(svc.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let svc = service().await;
        let games = svc.create_category("Games".to_string()).await.unwrap();
        let renamed = svc
            .update_category(games.id, "Videogames".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "Videogames");
        assert_eq!(renamed.created_at, games.created_at);
    }

    #[tokio::test]
    async fn test_blank_name_rejected_before_write() {
        let svc = service().await;
        let err = svc.create_category("  ".to_string()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(svc.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_download_with_missing_refs_fails() {
        let svc = service().await;
        let err = svc.record_download(1, 1).await.unwrap_err();
        assert!(err.kind.is_constraint_violation());
        assert!(svc.downloads_of_item(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_by_prefix() {
        let svc = service().await;
        let games = svc.create_category("Games".to_string()).await.unwrap();
        let action = svc
            .create_subcategory("Action".to_string(), games.id)
            .await
            .unwrap();
        for name in ["Zelda", "Zork", "Doom"] {
            svc.create_item(name.to_string(), action.id).await.unwrap();
        }

        let results = svc.search(SearchTarget::Item, "Z").await.unwrap();
        assert_eq!(results.len(), 2);
        let results = svc.search(SearchTarget::Category, "Mu").await.unwrap();
        assert!(results.is_empty());
    }
}
