//! Login and token handlers.

use axum::extract::State;

use catalogue_entity::Session;
use catalogue_service::LoginSession;

use crate::dto::request::LoginRequest;
use crate::dto::response::Reply;
use crate::error::ApiError;
use crate::extractors::{BearerToken, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Reply<LoginSession>, ApiError> {
    let session = state.accounts.login(&req.username, &req.password).await?;
    Ok(Reply::ok(session))
}

/// GET /api/v1/token
pub async fn token(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Reply<Session>, ApiError> {
    Ok(Reply::ok(state.accounts.resolve_token(&token).await?))
}
