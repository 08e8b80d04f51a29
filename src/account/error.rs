//! Account operation errors.

use thiserror::Error;

use crate::domain::StorageError;
use crate::gateway::response::error_codes;

/// Errors surfaced by account use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("account not found")]
    NotFound,

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("operation timed out")]
    Timeout,
}

impl AccountError {
    /// Stable error code carried in the response envelope.
    pub fn code(&self) -> i32 {
        match self {
            AccountError::NotFound => error_codes::ACCOUNT_NOT_FOUND,
            AccountError::Storage(_) => error_codes::INTERNAL_ERROR,
            AccountError::Timeout => error_codes::TIMEOUT,
        }
    }

    /// HTTP status the error maps to.
    pub fn http_status(&self) -> u16 {
        match self {
            AccountError::NotFound => 404,
            AccountError::Storage(_) => 500,
            AccountError::Timeout => 504,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AccountError::NotFound.code(), error_codes::ACCOUNT_NOT_FOUND);
        assert_eq!(
            AccountError::Storage(StorageError("boom".into())).code(),
            error_codes::INTERNAL_ERROR
        );
        assert_eq!(AccountError::Timeout.code(), error_codes::TIMEOUT);
    }

    #[test]
    fn test_http_statuses() {
        assert_eq!(AccountError::NotFound.http_status(), 404);
        assert_eq!(
            AccountError::Storage(StorageError("boom".into())).http_status(),
            500
        );
        assert_eq!(AccountError::Timeout.http_status(), 504);
    }
}
