//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::sorting::SortField;

/// Generic CRUD repository trait.
///
/// `Entity` is the stored row and `Draft` is the data needed to insert a
/// new one. Entity-specific query methods are defined on the concrete
/// repository structs.
///
/// Absence is never an error here: lookups and removals of an unknown id
/// yield `Ok(None)`.
#[async_trait]
pub trait Repository<Entity, Draft>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Draft: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Entity>>;

    /// Find all entities in insertion order.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Find all entities in the requested order.
    async fn find_all_sorted(&self, sort: SortField) -> AppResult<Vec<Entity>>;

    /// Insert a new entity and return the stored row.
    async fn create(&self, draft: &Draft) -> AppResult<Entity>;

    /// Delete an entity and its dependents, returning the deleted row.
    async fn remove(&self, id: i64) -> AppResult<Option<Entity>>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}

/// Repositories whose rows may change after insertion.
///
/// Only name-bearing rows take this path. Sessions and downloads are
/// write-once; users change through their own single-column statements.
#[async_trait]
pub trait UpdatableRepository<Entity, Draft>: Repository<Entity, Draft>
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Draft: Send + Sync + 'static,
{
    /// Load an entity, apply `merge` to it and save it in one transaction.
    async fn modify<F>(&self, id: i64, merge: F) -> AppResult<Option<Entity>>
    where
        F: FnOnce(&mut Entity) + Send + 'static;
}
