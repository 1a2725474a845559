//! Route definitions for the catalogue HTTP API.
//!
//! Everything lives under `/api/v1`; the bare entry points redirect to the
//! item index. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(item_routes())
        .merge(category_routes())
        .merge(subcategory_routes())
        .merge(download_routes())
        .merge(user_routes())
        .merge(auth_routes())
        .route("/search/{entity}/{prefix}", get(handlers::search::search))
        .route("/health", get(handlers::health::health));

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::home::redirect_to_index))
        .route("/api/", get(handlers::home::redirect_to_index))
        .route("/api/v1/", get(handlers::home::redirect_to_index))
        .nest("/api/v1", api_routes)
        .fallback(handlers::home::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// Item index, ordered listings and CRUD
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/index", get(handlers::item::index))
        .route(
            "/index/orderby/{field}/{dir}",
            get(handlers::item::index_ordered),
        )
        .route(
            "/{category}/{subcategory}/orderby/{field}/{dir}",
            get(handlers::item::scoped_ordered),
        )
        .route("/item", post(handlers::item::create))
        .route(
            "/item/{id}",
            put(handlers::item::update).delete(handlers::item::delete),
        )
}

/// Category CRUD
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/category", post(handlers::category::create))
        .route(
            "/category/{id}",
            put(handlers::category::update).delete(handlers::category::delete),
        )
        .route(
            "/category/{id}/subcategories",
            get(handlers::category::subcategories),
        )
}

/// Subcategory CRUD
fn subcategory_routes() -> Router<AppState> {
    Router::new()
        .route("/subcategory", post(handlers::subcategory::create))
        .route(
            "/subcategory/{id}",
            put(handlers::subcategory::update).delete(handlers::subcategory::delete),
        )
        .route("/subcategory/{id}/items", get(handlers::subcategory::items))
}

/// Download records
///
/// Both `descarga` routes share the first parameter name: it is the user id
/// when recording and the item id when listing.
fn download_routes() -> Router<AppState> {
    Router::new()
        .route("/descarga/{id}/{item_id}", post(handlers::download::record))
        .route("/descarga/{id}", get(handlers::download::by_item))
        .route("/user/{id}/descargas", get(handlers::download::by_user))
}

/// User accounts
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(handlers::user::register))
        .route("/user/{id}", delete(handlers::user::delete))
        .route("/user/{id}/username", put(handlers::user::change_username))
        .route("/user/{id}/password", put(handlers::user::change_password))
}

/// Login and token lookup
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/token", get(handlers::auth::token))
}
