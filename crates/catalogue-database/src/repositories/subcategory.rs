//! Subcategory repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use catalogue_core::result::AppResult;
use catalogue_core::traits::{Repository, UpdatableRepository};
use catalogue_core::types::SortField;
use catalogue_entity::{NewSubcategory, Subcategory};

use crate::crud::{self, RowQuery, Table, UpdatableTable};
use crate::error::classify;

impl Table for Subcategory {
    const NAME: &'static str = "subcategory";
    const LABEL: &'static str = "subcategory";
    const HAS_NAME: bool = true;
    const CASCADE: &'static [&'static str] = &[
        "DELETE FROM download WHERE item_id IN ( \
            SELECT id FROM item WHERE subcategory_id = ?)",
        "DELETE FROM item WHERE subcategory_id = ?",
    ];
}

impl UpdatableTable for Subcategory {
    const UPDATE_SQL: &'static str = "UPDATE subcategory SET name = ? WHERE id = ? RETURNING *";

    fn bind_update<'q>(&self, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query.bind(self.name.clone())
    }
}

/// Repository for subcategories.
#[derive(Debug, Clone)]
pub struct SubcategoryRepository {
    pool: SqlitePool,
}

impl SubcategoryRepository {
    /// Create a new subcategory repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Subcategories belonging to a category.
    pub async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Subcategory>> {
        sqlx::query_as::<_, Subcategory>(
            "SELECT * FROM subcategory WHERE category_id = ? ORDER BY id ASC",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to list subcategories by category"))
    }

    /// Subcategories whose name starts with `prefix`, ordered by name.
    pub async fn find_by_name_prefix(&self, prefix: &str) -> AppResult<Vec<Subcategory>> {
        crud::find_by_name_prefix(&self.pool, prefix).await
    }

    /// Change a subcategory's name with a single statement.
    pub async fn rename(&self, id: i64, name: &str) -> AppResult<Option<Subcategory>> {
        crud::rename(&self.pool, id, name).await
    }
}

#[async_trait]
impl Repository<Subcategory, NewSubcategory> for SubcategoryRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Subcategory>> {
        crud::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Subcategory>> {
        crud::find_all(&self.pool).await
    }

    async fn find_all_sorted(&self, sort: SortField) -> AppResult<Vec<Subcategory>> {
        crud::find_all_sorted(&self.pool, sort).await
    }

    async fn create(&self, draft: &NewSubcategory) -> AppResult<Subcategory> {
        sqlx::query_as::<_, Subcategory>(
            "INSERT INTO subcategory (name, created_at, category_id) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&draft.name)
        .bind(draft.created_at)
        .bind(draft.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to create subcategory"))
    }

    async fn remove(&self, id: i64) -> AppResult<Option<Subcategory>> {
        crud::remove(&self.pool, id).await
    }

    async fn count(&self) -> AppResult<u64> {
        crud::count::<Subcategory>(&self.pool).await
    }
}

#[async_trait]
impl UpdatableRepository<Subcategory, NewSubcategory> for SubcategoryRepository {
    async fn modify<F>(&self, id: i64, merge: F) -> AppResult<Option<Subcategory>>
    where
        F: FnOnce(&mut Subcategory) + Send + 'static,
    {
        crud::modify(&self.pool, id, merge).await
    }
}
