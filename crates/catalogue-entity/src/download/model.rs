//! Download entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A record of a user downloading an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    /// Server-assigned identifier.
    pub id: i64,
    /// When the download happened.
    pub created_at: DateTime<Utc>,
    /// The downloading user.
    #[serde(rename = "user")]
    pub user_id: i64,
    /// The downloaded item.
    #[serde(rename = "item")]
    pub item_id: i64,
}

/// Data required to insert a download.
#[derive(Debug, Clone)]
pub struct NewDownload {
    /// The downloading user.
    pub user_id: i64,
    /// The downloaded item.
    pub item_id: i64,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
}
