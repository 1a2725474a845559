//! Item listing and CRUD handlers.

use axum::extract::State;

use catalogue_core::types::SortField;
use catalogue_entity::Item;

use crate::dto::request::{CreateItemRequest, NameRequest};
use crate::dto::response::Reply;
use crate::error::ApiError;
use crate::extractors::{ValidPath, ValidatedJson};
use crate::state::AppState;

const ABSENT: &str = "The item does not exist";
const REMOVED: &str = "The item was removed successfully";

/// GET /api/v1/index
pub async fn index(State(state): State<AppState>) -> Result<Reply<Vec<Item>>, ApiError> {
    Ok(Reply::ok(state.catalogue.list_items().await?))
}

/// GET /api/v1/index/orderby/{field}/{dir}
pub async fn index_ordered(
    State(state): State<AppState>,
    ValidPath((field, dir)): ValidPath<(String, String)>,
) -> Result<Reply<Vec<Item>>, ApiError> {
    let sort = SortField::parse(&field, &dir)?;
    Ok(Reply::ok(state.catalogue.list_items_sorted(sort).await?))
}

/// GET /api/v1/{category}/{subcategory}/orderby/{field}/{dir}
///
/// The category and subcategory segments are accepted but do not filter.
pub async fn scoped_ordered(
    State(state): State<AppState>,
    ValidPath((_category, _subcategory, field, dir)): ValidPath<(String, String, String, String)>,
) -> Result<Reply<Vec<Item>>, ApiError> {
    let sort = SortField::parse(&field, &dir)?;
    Ok(Reply::ok(state.catalogue.list_items_sorted(sort).await?))
}

/// POST /api/v1/item
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateItemRequest>,
) -> Result<Reply<Item>, ApiError> {
    let item = state.catalogue.create_item(req.name, req.subcategory).await?;
    Ok(Reply::created(item))
}

/// PUT /api/v1/item/{id}
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidatedJson(req): ValidatedJson<NameRequest>,
) -> Result<Reply<Item>, ApiError> {
    let updated = state.catalogue.update_item(id, req.name).await?;
    Ok(Reply::found_or(updated, ABSENT))
}

/// DELETE /api/v1/item/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Reply<Item>, ApiError> {
    let removed = state.catalogue.delete_item(id).await?;
    Ok(Reply::removed_or(removed, REMOVED, ABSENT))
}
