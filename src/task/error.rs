//! Task operation errors.

use thiserror::Error;

use crate::domain::StorageError;
use crate::gateway::response::error_codes;

/// Errors surfaced by task use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task not found")]
    NotFound,

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("operation timed out")]
    Timeout,
}

impl TaskError {
    /// Stable error code carried in the response envelope.
    pub fn code(&self) -> i32 {
        match self {
            TaskError::NotFound => error_codes::TASK_NOT_FOUND,
            TaskError::Storage(_) => error_codes::INTERNAL_ERROR,
            TaskError::Timeout => error_codes::TIMEOUT,
        }
    }

    /// HTTP status the error maps to.
    pub fn http_status(&self) -> u16 {
        match self {
            TaskError::NotFound => 404,
            TaskError::Storage(_) => 500,
            TaskError::Timeout => 504,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_statuses() {
        assert_eq!(TaskError::NotFound.code(), error_codes::TASK_NOT_FOUND);
        assert_eq!(TaskError::NotFound.http_status(), 404);
        assert_eq!(
            TaskError::Storage(StorageError("boom".into())).http_status(),
            500
        );
        assert_eq!(TaskError::Timeout.http_status(), 504);
    }
}
