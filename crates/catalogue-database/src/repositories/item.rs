//! Item repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use catalogue_core::result::AppResult;
use catalogue_core::traits::{Repository, UpdatableRepository};
use catalogue_core::types::SortField;
use catalogue_entity::{Item, NewItem};

use crate::crud::{self, RowQuery, Table, UpdatableTable};
use crate::error::classify;

impl Table for Item {
    const NAME: &'static str = "item";
    const LABEL: &'static str = "item";
    const HAS_NAME: bool = true;
    const CASCADE: &'static [&'static str] = &["DELETE FROM download WHERE item_id = ?"];
}

impl UpdatableTable for Item {
    const UPDATE_SQL: &'static str = "UPDATE item SET name = ? WHERE id = ? RETURNING *";

    fn bind_update<'q>(&self, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query.bind(self.name.clone())
    }
}

/// Repository for items.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Items belonging to a subcategory.
    pub async fn find_by_subcategory(&self, subcategory_id: i64) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM item WHERE subcategory_id = ? ORDER BY id ASC")
            .bind(subcategory_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(e, "Failed to list items by subcategory"))
    }

    /// Items whose name starts with `prefix`, ordered by name.
    pub async fn find_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<Item>> {
        crud::find_by_name_prefix(&self.pool, prefix).await
    }

    /// Change an item's name with a single statement.
    pub async fn rename(&self, id: i64, name: &str) -> AppResult<Option<Item>> {
        crud::rename(&self.pool, id, name).await
    }
}

#[async_trait]
impl Repository<Item, NewItem> for ItemRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>> {
        crud::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Item>> {
        crud::find_all(&self.pool).await
    }

    async fn find_all_sorted(&self, sort: SortField) -> AppResult<Vec<Item>> {
        crud::find_all_sorted(&self.pool, sort).await
    }

    async fn create(&self, draft: &NewItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO item (name, created_at, subcategory_id) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&draft.name)
        .bind(draft.created_at)
        .bind(draft.subcategory_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to create item"))
    }

    async fn remove(&self, id: i64) -> AppResult<Option<Item>> {
        crud::remove(&self.pool, id).await
    }

    async fn count(&self) -> AppResult<u64> {
        crud::count::<Item>(&self.pool).await
    }
}

#[async_trait]
impl UpdatableRepository<Item, NewItem> for ItemRepository {
    async fn modify<F>(&self, id: i64, merge: F) -> AppResult<Option<Item>>
    where
        F: FnOnce(&mut Item) + Send + 'static,
    {
        crud::modify(&self.pool, id, merge).await
    }
}
