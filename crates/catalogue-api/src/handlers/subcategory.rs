//! Subcategory CRUD handlers.

use axum::extract::State;

use catalogue_entity::{Item, Subcategory};

use crate::dto::request::{CreateSubcategoryRequest, NameRequest};
use crate::dto::response::Reply;
use crate::error::ApiError;
use crate::extractors::{ValidPath, ValidatedJson};
use crate::state::AppState;

const ABSENT: &str = "The subcategory does not exist";
const REMOVED: &str = "The subcategory was removed successfully";

/// POST /api/v1/subcategory
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateSubcategoryRequest>,
) -> Result<Reply<Subcategory>, ApiError> {
    let subcategory = state
        .catalogue
        .create_subcategory(req.name, req.category)
        .await?;
    Ok(Reply::created(subcategory))
}

/// PUT /api/v1/subcategory/{id}
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidatedJson(req): ValidatedJson<NameRequest>,
) -> Result<Reply<Subcategory>, ApiError> {
    let updated = state.catalogue.update_subcategory(id, req.name).await?;
    Ok(Reply::found_or(updated, ABSENT))
}

/// DELETE /api/v1/subcategory/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Reply<Subcategory>, ApiError> {
    let removed = state.catalogue.delete_subcategory(id).await?;
    Ok(Reply::removed_or(removed, REMOVED, ABSENT))
}

/// GET /api/v1/subcategory/{id}/items
pub async fn items(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Reply<Vec<Item>>, ApiError> {
    Ok(Reply::ok(state.catalogue.items_of(id).await?))
}
