//! Error types for the data access layer.
//!
//! # Design
//! `NotFound` is its own variant so callers can tell "no such record" apart
//! from driver failures, even though the HTTP layer currently maps both to
//! the same status.

use thiserror::Error;

use crate::types::TodoId;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by `TodoStore` implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matched the requested id.
    #[error("not found")]
    NotFound,

    /// A record with this id already exists.
    #[error("duplicate key: {0}")]
    Duplicate(TodoId),

    /// The connection string does not name a database.
    #[error("connection string does not name a database")]
    MissingDatabase,

    /// Any error reported by the MongoDB driver.
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// A string that is not a syntactically valid object id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Not an Object ID")]
pub struct InvalidTodoId;
