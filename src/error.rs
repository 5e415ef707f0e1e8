//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and catalog-parse errors, and provides semantic variants
//! for size validation and backend failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Duplicate avatar id in catalog: {id}")]
    DuplicateId { id: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Duplicate target size: {size}")]
    DuplicateSize { size: u32 },

    #[error("Target size list is empty")]
    EmptySizes,

    #[error("Source image not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    #[error("Image error: {0}")]
    Image(String),

    #[error("Resize error: {0}")]
    Resize(String),
}

impl Error {
    pub fn image<E: std::fmt::Display>(e: E) -> Self {
        Error::Image(e.to_string())
    }

    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
