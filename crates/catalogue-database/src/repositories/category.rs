//! Category repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use catalogue_core::result::AppResult;
use catalogue_core::traits::{Repository, UpdatableRepository};
use catalogue_core::types::SortField;
use catalogue_entity::{Category, NewCategory};

use crate::crud::{self, RowQuery, Table, UpdatableTable};
use crate::error::classify;

impl Table for Category {
    const NAME: &'static str = "category";
    const LABEL: &'static str = "category";
    const HAS_NAME: bool = true;
    const CASCADE: &'static [&'static str] = &[
        "DELETE FROM download WHERE item_id IN ( \
            SELECT item.id FROM item \
            JOIN subcategory ON item.subcategory_id = subcategory.id \
            WHERE subcategory.category_id = ?)",
        "DELETE FROM item WHERE subcategory_id IN ( \
            SELECT id FROM subcategory WHERE category_id = ?)",
        "DELETE FROM subcategory WHERE category_id = ?",
    ];
}

impl UpdatableTable for Category {
    const UPDATE_SQL: &'static str = "UPDATE category SET name = ? WHERE id = ? RETURNING *";

    fn bind_update<'q>(&self, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query.bind(self.name.clone())
    }
}

/// Repository for categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Categories whose name starts with `prefix`, ordered by name.
    pub async fn find_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<Category>> {
        crud::find_by_name_prefix(&self.pool, prefix).await
    }

    /// Change a category's name with a single statement.
    pub async fn rename(&self, id: i64, name: &str) -> AppResult<Option<Category>> {
        crud::rename(&self.pool, id, name).await
    }
}

#[async_trait]
impl Repository<Category, NewCategory> for CategoryRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        crud::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        crud::find_all(&self.pool).await
    }

    async fn find_all_sorted(&self, sort: SortField) -> AppResult<Vec<Category>> {
        crud::find_all_sorted(&self.pool, sort).await
    }

    async fn create(&self, draft: &NewCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO category (name, created_at) VALUES (?, ?) RETURNING *",
        )
        .bind(&draft.name)
        .bind(draft.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to create category"))
    }

    async fn remove(&self, id: i64) -> AppResult<Option<Category>> {
        crud::remove(&self.pool, id).await
    }

    async fn count(&self) -> AppResult<u64> {
        crud::count::<Category>(&self.pool).await
    }
}

#[async_trait]
impl UpdatableRepository<Category, NewCategory> for CategoryRepository {
    async fn modify<F>(&self, id: i64, merge: F) -> AppResult<Option<Category>>
    where
        F: FnOnce(&mut Category) + Send + 'static,
    {
        crud::modify(&self.pool, id, merge).await
    }
}
