//! Opaque session tokens.

use uuid::Uuid;

/// Generate a fresh 32-character lowercase hex token.
pub fn generate_token() -> String {
    Uuid::new_v4().simple().to_string()
}
