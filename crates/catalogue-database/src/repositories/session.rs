//! Session repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use catalogue_core::result::AppResult;
use catalogue_core::traits::Repository;
use catalogue_core::types::SortField;
use catalogue_entity::{NewSession, Session};

use crate::crud::{self, Table};
use crate::error::classify;

impl Table for Session {
    const NAME: &'static str = "session";
    const LABEL: &'static str = "session";
    const HAS_NAME: bool = false;
}

/// Repository for login sessions.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a session by its token.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM session WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, "Failed to find session by token"))
    }

    /// Sessions of a user, newest first.
    pub async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM session WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to list sessions by user"))
    }
}

#[async_trait]
impl Repository<Session, NewSession> for SessionRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Session>> {
        crud::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Session>> {
        crud::find_all(&self.pool).await
    }

    async fn find_all_sorted(&self, sort: SortField) -> AppResult<Vec<Session>> {
        crud::find_all_sorted(&self.pool, sort).await
    }

    async fn create(&self, draft: &NewSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO session (token, created_at, user_id) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&draft.token)
        .bind(draft.created_at)
        .bind(draft.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to create session"))
    }

    async fn remove(&self, id: i64) -> AppResult<Option<Session>> {
        crud::remove(&self.pool, id).await
    }

    async fn count(&self) -> AppResult<u64> {
        crud::count::<Session>(&self.pool).await
    }
}
