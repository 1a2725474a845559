//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A login session. Created on successful login, destroyed with its user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Server-assigned identifier.
    pub id: i64,
    /// Opaque bearer token.
    pub token: String,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// The user this session belongs to.
    #[serde(rename = "user")]
    pub user_id: i64,
}

/// Data required to insert a session.
#[derive(Debug, Clone)]
pub struct NewSession {
    /// The user this session belongs to.
    pub user_id: i64,
    /// Opaque bearer token.
    pub token: String,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
}
