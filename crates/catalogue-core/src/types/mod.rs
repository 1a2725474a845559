//! Core type definitions used across the catalogue workspace.

pub mod sorting;

pub use sorting::{OrderField, SortDirection, SortField};
