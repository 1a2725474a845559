//! Category CRUD handlers.

use axum::extract::State;

use catalogue_entity::{Category, Subcategory};

use crate::dto::request::{CreateCategoryRequest, NameRequest};
use crate::dto::response::Reply;
use crate::error::ApiError;
use crate::extractors::{ValidPath, ValidatedJson};
use crate::state::AppState;

const ABSENT: &str = "The category does not exist";
const REMOVED: &str = "The category was removed successfully";

/// POST /api/v1/category
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Result<Reply<Category>, ApiError> {
    let category = state.catalogue.create_category(req.name).await?;
    Ok(Reply::created(category))
}

/// PUT /api/v1/category/{id}
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidatedJson(req): ValidatedJson<NameRequest>,
) -> Result<Reply<Category>, ApiError> {
    let updated = state.catalogue.update_category(id, req.name).await?;
    Ok(Reply::found_or(updated, ABSENT))
}

/// DELETE /api/v1/category/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Reply<Category>, ApiError> {
    let removed = state.catalogue.delete_category(id).await?;
    Ok(Reply::removed_or(removed, REMOVED, ABSENT))
}

/// GET /api/v1/category/{id}/subcategories
pub async fn subcategories(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Reply<Vec<Subcategory>>, ApiError> {
    Ok(Reply::ok(state.catalogue.subcategories_of(id).await?))
}
