//! Download handlers.

use axum::extract::State;

use catalogue_entity::Download;

use crate::dto::response::Reply;
use crate::error::ApiError;
use crate::extractors::ValidPath;
use crate::state::AppState;

/// POST /api/v1/descarga/{user_id}/{item_id}
pub async fn record(
    State(state): State<AppState>,
    ValidPath((user_id, item_id)): ValidPath<(i64, i64)>,
) -> Result<Reply<Download>, ApiError> {
    let download = state.catalogue.record_download(user_id, item_id).await?;
    Ok(Reply::created(download))
}

/// GET /api/v1/descarga/{item_id}
pub async fn by_item(
    State(state): State<AppState>,
    ValidPath(item_id): ValidPath<i64>,
) -> Result<Reply<Vec<Download>>, ApiError> {
    Ok(Reply::ok(state.catalogue.downloads_of_item(item_id).await?))
}

/// GET /api/v1/user/{id}/descargas
pub async fn by_user(
    State(state): State<AppState>,
    ValidPath(user_id): ValidPath<i64>,
) -> Result<Reply<Vec<Download>>, ApiError> {
    Ok(Reply::ok(state.catalogue.downloads_of_user(user_id).await?))
}
