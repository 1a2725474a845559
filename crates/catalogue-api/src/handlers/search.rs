//! Name-prefix search handler.

use axum::extract::State;

use catalogue_service::catalogue::{SearchResults, SearchTarget};

use crate::dto::response::Reply;
use crate::error::ApiError;
use crate::extractors::ValidPath;
use crate::state::AppState;

/// GET /api/v1/search/{entity}/{prefix}
pub async fn search(
    State(state): State<AppState>,
    ValidPath((entity, prefix)): ValidPath<(String, String)>,
) -> Result<Reply<SearchResults>, ApiError> {
    let target: SearchTarget = entity.parse()?;
    Ok(Reply::ok(state.catalogue.search(target, &prefix).await?))
}
