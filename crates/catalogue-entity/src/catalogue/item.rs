//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A downloadable entry of the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned identifier.
    pub id: i64,
    /// Item name.
    pub name: String,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// Owning subcategory.
    #[serde(rename = "subcategory")]
    pub subcategory_id: i64,
}

/// Data required to insert an item.
#[derive(Debug, Clone)]
pub struct NewItem {
    /// Item name.
    pub name: String,
    /// Owning subcategory.
    pub subcategory_id: i64,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
}
