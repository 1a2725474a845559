//! HTTP request handlers grouped by resource.

pub mod auth;
pub mod category;
pub mod download;
pub mod health;
pub mod home;
pub mod item;
pub mod search;
pub mod subcategory;
pub mod user;
