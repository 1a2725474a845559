//! Download domain entities.

pub mod model;

pub use model::{Download, NewDownload};
