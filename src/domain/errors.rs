//! Domain-level storage failure.

use thiserror::Error;

/// Persistence failure, carrying the underlying driver message.
///
/// Repository ports return this instead of a driver error type so the
/// services stay independent of the concrete store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self(err.to_string())
    }
}
