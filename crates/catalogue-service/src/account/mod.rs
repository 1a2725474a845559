//! User accounts and login sessions.

pub mod service;

pub use service::{AccountService, LoginSession};
