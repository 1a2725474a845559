//! Health check handler.

use axum::extract::State;

use crate::dto::response::{HealthResponse, Reply};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> Result<Reply<HealthResponse>, ApiError> {
    state.db.health_check().await?;

    Ok(Reply::ok(HealthResponse {
        status: "ok".to_string(),
        database: "connected".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
