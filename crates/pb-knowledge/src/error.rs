//! Catalog loading error types.

use thiserror::Error;

/// Errors that can occur while loading or querying catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("parse error on record {record}: {message}")]
    Parse { record: usize, message: String },

    #[error("not found: {0}")]
    NotFound(String),
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
