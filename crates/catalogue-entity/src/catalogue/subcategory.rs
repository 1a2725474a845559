//! Subcategory entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subdivision of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    /// Server-assigned identifier.
    pub id: i64,
    /// Subcategory name.
    pub name: String,
    /// When the subcategory was created.
    pub created_at: DateTime<Utc>,
    /// Owning category.
    #[serde(rename = "category")]
    pub category_id: i64,
}

/// Data required to insert a subcategory.
#[derive(Debug, Clone)]
pub struct NewSubcategory {
    /// Subcategory name.
    pub name: String,
    /// Owning category.
    pub category_id: i64,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
}
