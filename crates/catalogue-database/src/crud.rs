//! Generic CRUD routines shared by every repository.
//!
//! A row type implements [`Table`] once; the routines here build the SQL
//! from that description. [`modify`] and [`remove`] run their load and
//! write inside a single `BEGIN IMMEDIATE` transaction, so concurrent
//! writers queue on the busy timeout and the last one wins.

use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteRow};
use sqlx::{FromRow, Sqlite};
use tracing::debug;

use catalogue_core::error::AppError;
use catalogue_core::result::AppResult;
use catalogue_core::types::{OrderField, SortField};

use crate::error::classify;

/// A `query_as` builder producing rows of `T`.
pub type RowQuery<'q, T> = QueryAs<'q, Sqlite, T, SqliteArguments<'q>>;

/// Describes how a row type maps onto its table.
pub trait Table: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Table identifier, quoted where it collides with a keyword.
    const NAME: &'static str;

    /// Singular label used in log and error messages.
    const LABEL: &'static str;

    /// Whether the table has a `name` column to order by.
    const HAS_NAME: bool;

    /// Statements deleting dependent rows, deepest first. Each binds the
    /// parent id once.
    const CASCADE: &'static [&'static str] = &[];
}

/// A table whose rows can be rewritten by [`modify`].
pub trait UpdatableTable: Table {
    /// `UPDATE ... RETURNING *` statement writing every mutable column. The
    /// row id is bound last.
    const UPDATE_SQL: &'static str;

    /// Bind the mutable columns in the order `UPDATE_SQL` expects them.
    fn bind_update<'q>(&self, query: RowQuery<'q, Self>) -> RowQuery<'q, Self>;
}

/// Opens a write transaction holding the database write lock from the start.
///
/// A deferred transaction that reads first cannot wait for the lock once
/// another connection writes, and fails with `SQLITE_BUSY` instead.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

/// Load a row by id.
pub async fn find_by_id<T: Table>(pool: &SqlitePool, id: i64) -> AppResult<Option<T>> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", T::NAME);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| classify(e, &format!("Failed to find {}", T::LABEL)))
}

/// Load every row in insertion order.
pub async fn find_all<T: Table>(pool: &SqlitePool) -> AppResult<Vec<T>> {
    let sql = format!("SELECT * FROM {} ORDER BY id ASC", T::NAME);
    sqlx::query_as::<_, T>(&sql)
        .fetch_all(pool)
        .await
        .map_err(|e| classify(e, &format!("Failed to list {}", T::LABEL)))
}

/// Load every row ordered by `sort`, ties broken by id.
pub async fn find_all_sorted<T: Table>(pool: &SqlitePool, sort: SortField) -> AppResult<Vec<T>> {
    if sort.field == OrderField::Name && !T::HAS_NAME {
        return Err(AppError::validation(format!(
            "A {} cannot be ordered by name",
            T::LABEL
        )));
    }

    let sql = format!("SELECT * FROM {} {}", T::NAME, sort.order_by_clause());
    sqlx::query_as::<_, T>(&sql)
        .fetch_all(pool)
        .await
        .map_err(|e| classify(e, &format!("Failed to list {}", T::LABEL)))
}

/// Load every row whose name starts with `prefix`, ordered by name.
pub async fn find_by_name_prefix<T: Table>(pool: &SqlitePool, prefix: &str) -> AppResult<Vec<T>> {
    if !T::HAS_NAME {
        return Err(AppError::validation(format!(
            "A {} cannot be searched by name",
            T::LABEL
        )));
    }

    let sql = format!(
        "SELECT * FROM {} WHERE name LIKE ? ESCAPE '\\' ORDER BY name ASC, id ASC",
        T::NAME
    );
    sqlx::query_as::<_, T>(&sql)
        .bind(like_prefix(prefix))
        .fetch_all(pool)
        .await
        .map_err(|e| classify(e, &format!("Failed to search {}", T::LABEL)))
}

/// Overwrite the name column with a single statement.
pub async fn rename<T: Table>(pool: &SqlitePool, id: i64, name: &str) -> AppResult<Option<T>> {
    if !T::HAS_NAME {
        return Err(AppError::validation(format!(
            "A {} has no name to change",
            T::LABEL
        )));
    }

    let sql = format!("UPDATE {} SET name = ? WHERE id = ? RETURNING *", T::NAME);
    sqlx::query_as::<_, T>(&sql)
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| classify(e, &format!("Failed to rename {}", T::LABEL)))
}

/// Count rows.
pub async fn count<T: Table>(pool: &SqlitePool) -> AppResult<u64> {
    let sql = format!("SELECT COUNT(*) FROM {}", T::NAME);
    let total: i64 = sqlx::query_scalar(&sql)
        .fetch_one(pool)
        .await
        .map_err(|e| classify(e, &format!("Failed to count {}", T::LABEL)))?;
    Ok(total.max(0) as u64)
}

/// Load a row, apply `merge` to it and write it back.
///
/// Returns `None` without writing anything when the id does not exist.
pub async fn modify<T, F>(pool: &SqlitePool, id: i64, merge: F) -> AppResult<Option<T>>
where
    T: UpdatableTable,
    F: FnOnce(&mut T) + Send,
{
    let mut tx = pool
        .begin_with(BEGIN_WRITE)
        .await
        .map_err(|e| classify(e, "Failed to begin transaction"))?;

    let select = format!("SELECT * FROM {} WHERE id = ?", T::NAME);
    let existing = sqlx::query_as::<_, T>(&select)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| classify(e, &format!("Failed to load {}", T::LABEL)))?;

    let Some(mut row) = existing else {
        debug!(table = T::LABEL, id, "Nothing to update");
        return Ok(None);
    };

    merge(&mut row);

    let saved = row
        .bind_update(sqlx::query_as::<_, T>(T::UPDATE_SQL))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, &format!("Failed to update {}", T::LABEL)))?;

    tx.commit()
        .await
        .map_err(|e| classify(e, "Failed to commit transaction"))?;

    Ok(Some(saved))
}

/// Delete a row and everything that depends on it.
///
/// Returns the deleted row, or `None` when the id does not exist.
pub async fn remove<T: Table>(pool: &SqlitePool, id: i64) -> AppResult<Option<T>> {
    let mut tx = pool
        .begin_with(BEGIN_WRITE)
        .await
        .map_err(|e| classify(e, "Failed to begin transaction"))?;

    let select = format!("SELECT * FROM {} WHERE id = ?", T::NAME);
    let existing = sqlx::query_as::<_, T>(&select)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| classify(e, &format!("Failed to load {}", T::LABEL)))?;

    let Some(row) = existing else {
        debug!(table = T::LABEL, id, "Nothing to delete");
        return Ok(None);
    };

    for statement in T::CASCADE.iter().copied() {
        let result = sqlx::query(statement)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| classify(e, &format!("Failed to delete {} dependents", T::LABEL)))?;
        debug!(
            table = T::LABEL,
            id,
            rows = result.rows_affected(),
            "Cascade step"
        );
    }

    let delete = format!("DELETE FROM {} WHERE id = ?", T::NAME);
    sqlx::query(&delete)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify(e, &format!("Failed to delete {}", T::LABEL)))?;

    tx.commit()
        .await
        .map_err(|e| classify(e, "Failed to commit transaction"))?;

    Ok(Some(row))
}

/// Build a `LIKE` pattern matching values that start with `prefix`.
pub fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use catalogue_core::traits::Repository;
    use catalogue_entity::{
        Category, Download, Item, NewDownload, NewSession, Session, Subcategory, User,
    };

    use super::*;
    use crate::repositories::{DownloadRepository, SessionRepository, fixtures};

    #[test]
    fn test_like_prefix_escapes_wildcards() {
        assert_eq!(like_prefix("Ga"), "Ga%");
        assert_eq!(like_prefix("50%_off"), "50\\%\\_off%");
        assert_eq!(like_prefix(""), "%");
    }

    #[tokio::test]
    async fn test_remove_category_cascades_to_every_descendant() {
        let pool = fixtures::pool().await;
        let games = fixtures::category(&pool, "Games").await;
        let music = fixtures::category(&pool, "Music").await;
        let action = fixtures::subcategory(&pool, "Action", games.id).await;
        let jazz = fixtures::subcategory(&pool, "Jazz", music.id).await;
        let zelda = fixtures::item(&pool, "Zelda", action.id).await;
        let kind_of_blue = fixtures::item(&pool, "Kind of Blue", jazz.id).await;
        let user = fixtures::user(&pool, "lorena").await;

        let downloads = DownloadRepository::new(pool.clone());
        for item_id in [zelda.id, kind_of_blue.id] {
            downloads
                .create(&NewDownload {
                    user_id: user.id,
                    item_id,
                    created_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        let removed = remove::<Category>(&pool, games.id).await.unwrap().unwrap();
        assert_eq!(removed.name, "Games");

        assert!(find_by_id::<Subcategory>(&pool, action.id).await.unwrap().is_none());
        assert!(find_by_id::<Item>(&pool, zelda.id).await.unwrap().is_none());
        assert_eq!(count::<Download>(&pool).await.unwrap(), 1);

        // Siblings under another category survive.
        assert!(find_by_id::<Subcategory>(&pool, jazz.id).await.unwrap().is_some());
        assert!(find_by_id::<Item>(&pool, kind_of_blue.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_remove_user_cascades_to_sessions_and_downloads() {
        let pool = fixtures::pool().await;
        let games = fixtures::category(&pool, "Games").await;
        let action = fixtures::subcategory(&pool, "Action", games.id).await;
        let zelda = fixtures::item(&pool, "Zelda", action.id).await;
        let user = fixtures::user(&pool, "lorena").await;

        DownloadRepository::new(pool.clone())
            .create(&NewDownload {
                user_id: user.id,
                item_id: zelda.id,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        SessionRepository::new(pool.clone())
            .create(&NewSession {
                user_id: user.id,
                token: "0123456789abcdef0123456789abcdef".to_string(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        assert!(remove::<User>(&pool, user.id).await.unwrap().is_some());
        assert_eq!(count::<Download>(&pool).await.unwrap(), 0);
        assert_eq!(count::<Session>(&pool).await.unwrap(), 0);
        assert!(find_by_id::<Item>(&pool, zelda.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_remove_missing_returns_none() {
        let pool = fixtures::pool().await;
        fixtures::category(&pool, "Games").await;

        assert!(remove::<Category>(&pool, 999).await.unwrap().is_none());
        assert_eq!(count::<Category>(&pool).await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_removes_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = crate::DatabasePool::connect(&catalogue_core::config::DatabaseConfig {
            url: format!("sqlite://{}/catalogue.db", dir.path().display()),
            ..Default::default()
        })
        .await
        .unwrap();
        crate::migration::run_migrations(db.pool()).await.unwrap();
        let pool = db.pool().clone();
        let games = fixtures::category(&pool, "Games").await;
        let action = fixtures::subcategory(&pool, "Action", games.id).await;
        fixtures::item(&pool, "Zelda", action.id).await;

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let pool = pool.clone();
                tokio::spawn(async move { remove::<Category>(&pool, games.id).await })
            })
            .collect();

        let mut removed = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().is_some() {
                removed += 1;
            }
        }
        assert_eq!(removed, 1);
        assert_eq!(count::<Item>(&pool).await.unwrap(), 0);
        db.close().await;
    }

    #[tokio::test]
    async fn test_rename_requires_name_column() {
        let pool = fixtures::pool().await;
        let err = rename::<Download>(&pool, 1, "x").await.unwrap_err();
        assert_eq!(err.kind, catalogue_core::error::ErrorKind::Validation);
    }
}
