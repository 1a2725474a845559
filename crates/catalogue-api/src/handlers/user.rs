//! User account handlers.

use axum::extract::State;

use catalogue_entity::User;

use crate::dto::request::{ChangePasswordRequest, ChangeUsernameRequest, CreateUserRequest};
use crate::dto::response::Reply;
use crate::error::ApiError;
use crate::extractors::{ValidPath, ValidatedJson};
use crate::state::AppState;

const ABSENT: &str = "The user does not exist";
const REMOVED: &str = "The user was removed successfully";

/// POST /api/v1/user
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<Reply<User>, ApiError> {
    let user = state.accounts.register(req.username, &req.password).await?;
    Ok(Reply::created(user))
}

/// PUT /api/v1/user/{id}/username
pub async fn change_username(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidatedJson(req): ValidatedJson<ChangeUsernameRequest>,
) -> Result<Reply<User>, ApiError> {
    let updated = state.accounts.change_username(id, req.username).await?;
    Ok(Reply::found_or(updated, ABSENT))
}

/// PUT /api/v1/user/{id}/password
pub async fn change_password(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<Reply<User>, ApiError> {
    let updated = state.accounts.change_password(id, &req.password).await?;
    Ok(Reply::found_or(updated, ABSENT))
}

/// DELETE /api/v1/user/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Reply<User>, ApiError> {
    let removed = state.accounts.delete_user(id).await?;
    Ok(Reply::removed_or(removed, REMOVED, ABSENT))
}
