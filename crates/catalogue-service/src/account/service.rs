//! Account management and the login/token flow.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use catalogue_auth::{PasswordHasher, generate_token};
use catalogue_core::error::AppError;
use catalogue_core::traits::Repository;
use catalogue_database::repositories::{SessionRepository, UserRepository};
use catalogue_entity::{NewSession, NewUser, Session, User};

use crate::names;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// What a successful login hands back to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    /// Bearer token for later requests.
    pub token: String,
    /// The authenticated user.
    pub user: User,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
}

/// Registers users, changes their credentials and opens sessions.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Session repository.
    session_repo: Arc<SessionRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(user_repo: Arc<UserRepository>, session_repo: Arc<SessionRepository>) -> Self {
        Self {
            user_repo,
            session_repo,
            hasher: PasswordHasher::new(),
        }
    }

    /// Registers a user. The password is stored hashed.
    pub async fn register(&self, username: String, password: &str) -> Result<User, AppError> {
        let username = names::checked("Username", username)?;
        if password.is_empty() {
            return Err(AppError::validation("Password cannot be empty"));
        }

        let user = self
            .user_repo
            .create(&NewUser {
                username,
                password_hash: self.hasher.hash_password(password)?,
                created_at: Utc::now(),
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Changes a username. `None` when the user does not exist.
    pub async fn change_username(
        &self,
        id: i64,
        username: String,
    ) -> Result<Option<User>, AppError> {
        let username = names::checked("Username", username)?;
        let updated = self
            .user_repo
            .update_username(id, &username, Utc::now())
            .await?;

        if let Some(user) = &updated {
            info!(user_id = user.id, username = %user.username, "Username changed");
        }
        Ok(updated)
    }

    /// Replaces a password. `None` when the user does not exist.
    pub async fn change_password(&self, id: i64, password: &str) -> Result<Option<User>, AppError> {
        if password.is_empty() {
            return Err(AppError::validation("Password cannot be empty"));
        }

        let hash = self.hasher.hash_password(password)?;
        let updated = self.user_repo.update_password(id, &hash, Utc::now()).await?;

        if updated.is_some() {
            info!(user_id = id, "Password changed");
        }
        Ok(updated)
    }

    /// Deletes a user with their sessions and downloads.
    pub async fn delete_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let removed = self.user_repo.remove(id).await?;
        if removed.is_some() {
            info!(user_id = id, "User deleted");
        }
        Ok(removed)
    }

    /// Checks credentials and opens a new session.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSession, AppError> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            warn!(username = %username, "Login attempt for unknown user");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password)? {
            warn!(user_id = user.id, "Login attempt with wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let session = self
            .session_repo
            .create(&NewSession {
                user_id: user.id,
                token: generate_token(),
                created_at: Utc::now(),
            })
            .await?;

        info!(user_id = user.id, session_id = session.id, "Session opened");
        Ok(LoginSession {
            token: session.token,
            user,
            created_at: session.created_at,
        })
    }

    /// Resolves a bearer token to its session.
    pub async fn resolve_token(&self, token: &str) -> Result<Session, AppError> {
        self.session_repo
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid or unknown token"))
    }
}
