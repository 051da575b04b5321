//! Storage-level error types.

use std::time::Duration;

use thiserror::Error;

/// Backend failures. "Not found" and rejected comment creation are not errors
/// and never travel through this type.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Storage call exceeded deadline of {0:?}")]
    Timeout(Duration),
}

impl StorageError {
    /// Whether the failure means the backend is unreachable, as opposed to a
    /// problem with one particular statement.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Connection(_) | StorageError::Timeout(_))
    }
}
