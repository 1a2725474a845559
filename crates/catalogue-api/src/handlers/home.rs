//! Entry-point redirects and the unknown-route fallback.

use axum::response::Redirect;

use catalogue_core::error::AppError;

use crate::error::ApiError;

/// Where the bare entry points send clients.
pub const INDEX_PATH: &str = "/api/v1/index";

/// GET / , /api/ , /api/v1/
pub async fn redirect_to_index() -> Redirect {
    Redirect::to(INDEX_PATH)
}

/// Any route not matched by the router.
pub async fn not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
