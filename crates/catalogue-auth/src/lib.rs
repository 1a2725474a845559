//! # catalogue-auth
//!
//! Credential primitives for the catalogue service: Argon2id password
//! hashing and opaque session tokens.

pub mod password;
pub mod token;

pub use password::PasswordHasher;
pub use token::generate_token;
