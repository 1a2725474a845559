//! Download repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use catalogue_core::result::AppResult;
use catalogue_core::traits::Repository;
use catalogue_core::types::SortField;
use catalogue_entity::{Download, NewDownload};

use crate::crud::{self, Table};
use crate::error::classify;

impl Table for Download {
    const NAME: &'static str = "download";
    const LABEL: &'static str = "download";
    const HAS_NAME: bool = false;
}

/// Repository for download records.
#[derive(Debug, Clone)]
pub struct DownloadRepository {
    pool: SqlitePool,
}

impl DownloadRepository {
    /// Create a new download repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Downloads made by a user.
    pub async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Download>> {
        sqlx::query_as::<_, Download>("SELECT * FROM download WHERE user_id = ? ORDER BY id ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(e, "Failed to list downloads by user"))
    }

    /// Downloads of an item.
    pub async fn find_by_item(&self, item_id: i64) -> AppResult<Vec<Download>> {
        sqlx::query_as::<_, Download>("SELECT * FROM download WHERE item_id = ? ORDER BY id ASC")
            .bind(item_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(e, "Failed to list downloads by item"))
    }
}

#[async_trait]
impl Repository<Download, NewDownload> for DownloadRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Download>> {
        crud::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Download>> {
        crud::find_all(&self.pool).await
    }

    async fn find_all_sorted(&self, sort: SortField) -> AppResult<Vec<Download>> {
        crud::find_all_sorted(&self.pool, sort).await
    }

    async fn create(&self, draft: &NewDownload) -> AppResult<Download> {
        sqlx::query_as::<_, Download>(
            "INSERT INTO download (created_at, user_id, item_id) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(draft.created_at)
        .bind(draft.user_id)
        .bind(draft.item_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to create download"))
    }

    async fn remove(&self, id: i64) -> AppResult<Option<Download>> {
        crud::remove(&self.pool, id).await
    }

    async fn count(&self) -> AppResult<u64> {
        crud::count::<Download>(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use catalogue_core::error::ErrorKind;
    use chrono::Utc;

    use super::*;
    use crate::repositories::fixtures;

    #[tokio::test]
    async fn test_dangling_reference_leaves_no_row() {
        let pool = fixtures::pool().await;
        let user = fixtures::user(&pool, "lorena").await;
        let repo = DownloadRepository::new(pool);

        let err = repo
            .create(&NewDownload {
                user_id: user.id,
                item_id: 999,
                created_at: Utc::now(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidReference);
        assert_eq!(err.message, "The referenced record does not exist");
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_by_user_and_item() {
        let pool = fixtures::pool().await;
        let games = fixtures::category(&pool, "Games").await;
        let action = fixtures::subcategory(&pool, "Action", games.id).await;
        let zelda = fixtures::item(&pool, "Zelda", action.id).await;
        let doom = fixtures::item(&pool, "Doom", action.id).await;
        let lorena = fixtures::user(&pool, "lorena").await;
        let pablo = fixtures::user(&pool, "pablo").await;
        let repo = DownloadRepository::new(pool);

        let pairs = [(lorena.id, zelda.id), (lorena.id, doom.id), (pablo.id, zelda.id)];
        for (user_id, item_id) in pairs {
            repo.create(&NewDownload {
                user_id,
                item_id,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        }

        assert_eq!(repo.find_by_user(lorena.id).await.unwrap().len(), 2);
        assert_eq!(repo.find_by_item(zelda.id).await.unwrap().len(), 2);
        assert_eq!(repo.find_by_item(doom.id).await.unwrap().len(), 1);
    }
}
