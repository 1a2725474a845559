//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Top level of the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned identifier.
    pub id: i64,
    /// Category name (unique).
    pub name: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Category name.
    pub name: String,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
}
