//! Request DTOs with validation.
//!
//! Unknown fields are ignored, so a client-supplied `id` or `createdAt`
//! never reaches the database.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body carrying only a new name. Used by every rename endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NameRequest {
    /// New name.
    #[validate(length(min = 1, max = 80, message = "Name must be 1 to 80 characters"))]
    pub name: String,
}

/// Create category request.
pub type CreateCategoryRequest = NameRequest;

/// Create subcategory request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubcategoryRequest {
    /// Subcategory name.
    #[validate(length(min = 1, max = 80, message = "Name must be 1 to 80 characters"))]
    pub name: String,
    /// Owning category id.
    #[serde(alias = "categoryId")]
    pub category: i64,
}

/// Create item request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    /// Item name.
    #[validate(length(min = 1, max = 80, message = "Name must be 1 to 80 characters"))]
    pub name: String,
    /// Owning subcategory id.
    #[serde(alias = "subcategoryId")]
    pub subcategory: i64,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Register user request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Username.
    #[validate(length(min = 1, max = 80, message = "Username must be 1 to 80 characters"))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Username change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangeUsernameRequest {
    /// New username.
    #[validate(length(min = 1, max = 80, message = "Username must be 1 to 80 characters"))]
    pub username: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// New plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
