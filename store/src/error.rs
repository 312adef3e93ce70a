//! Error types for todo storage.
//!
//! # Design
//! `InvalidArgument` and `NotFound` are caller mistakes and map to 4xx
//! responses. `Storage` wraps anything the database driver reports; its
//! detail is meant for logs, not for clients.

use thiserror::Error;

/// Errors returned by `TodoStore` operations and the input parsers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A path or form value could not be turned into the expected type.
    #[error("{0}")]
    InvalidArgument(String),

    /// No item has the requested id.
    #[error("todo {0} not found")]
    NotFound(i64),

    /// The backing database failed or could not be reached.
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
