//! User repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use catalogue_core::result::AppResult;
use catalogue_core::traits::Repository;
use catalogue_core::types::SortField;
use catalogue_entity::{NewUser, User};

use crate::crud::{self, Table};
use crate::error::classify;

impl Table for User {
    const NAME: &'static str = "\"user\"";
    const LABEL: &'static str = "user";
    const HAS_NAME: bool = false;
    const CASCADE: &'static [&'static str] = &[
        "DELETE FROM download WHERE user_id = ?",
        "DELETE FROM session WHERE user_id = ?",
    ];
}

/// Repository for users.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM \"user\" WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, "Failed to find user by username"))
    }

    /// Change a username and stamp `updated_at`.
    pub async fn update_username(
        &self,
        id: i64,
        username: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE \"user\" SET username = ?, updated_at = ? WHERE id = ? RETURNING *",
        )
        .bind(username)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to update username"))
    }

    /// Replace the password hash and stamp `updated_at`.
    pub async fn update_password(
        &self,
        id: i64,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE \"user\" SET password = ?, updated_at = ? WHERE id = ? RETURNING *",
        )
        .bind(password_hash)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to update password"))
    }
}

#[async_trait]
impl Repository<User, NewUser> for UserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        crud::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        crud::find_all(&self.pool).await
    }

    async fn find_all_sorted(&self, sort: SortField) -> AppResult<Vec<User>> {
        crud::find_all_sorted(&self.pool, sort).await
    }

    async fn create(&self, draft: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO \"user\" (username, password, created_at) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&draft.username)
        .bind(&draft.password_hash)
        .bind(draft.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "Failed to create user"))
    }

    async fn remove(&self, id: i64) -> AppResult<Option<User>> {
        crud::remove(&self.pool, id).await
    }

    async fn count(&self) -> AppResult<u64> {
        crud::count::<User>(&self.pool).await
    }
}
