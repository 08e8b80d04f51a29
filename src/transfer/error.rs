//! Transfer use-case errors.

use thiserror::Error;

use crate::domain::{InsufficientFunds, StorageError};
use crate::gateway::response::error_codes;

/// Errors surfaced by the transfer use cases
///
/// The origin/destination split is deliberate: the two lookups fail at
/// different steps and callers show different messages for them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("account origin not found")]
    AccountOriginNotFound,

    #[error("account destination not found")]
    AccountDestinationNotFound,

    #[error("{0}")]
    InsufficientFunds(#[from] InsufficientFunds),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("transfer operation timed out")]
    Timeout,
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> i32 {
        match self {
            TransferError::AccountOriginNotFound | TransferError::AccountDestinationNotFound => {
                error_codes::ACCOUNT_NOT_FOUND
            }
            TransferError::InsufficientFunds(_) => error_codes::INSUFFICIENT_FUNDS,
            TransferError::Storage(_) => error_codes::INTERNAL_ERROR,
            TransferError::Timeout => error_codes::TIMEOUT,
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::AccountOriginNotFound | TransferError::AccountDestinationNotFound => {
                404
            }
            TransferError::InsufficientFunds(_) => 422,
            TransferError::Storage(_) => 500,
            TransferError::Timeout => 504,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            TransferError::AccountOriginNotFound.code(),
            error_codes::ACCOUNT_NOT_FOUND
        );
        assert_eq!(
            TransferError::InsufficientFunds(InsufficientFunds).code(),
            error_codes::INSUFFICIENT_FUNDS
        );
        assert_eq!(TransferError::Timeout.code(), error_codes::TIMEOUT);
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TransferError::AccountOriginNotFound.http_status(), 404);
        assert_eq!(TransferError::AccountDestinationNotFound.http_status(), 404);
        assert_eq!(
            TransferError::InsufficientFunds(InsufficientFunds).http_status(),
            422
        );
        assert_eq!(
            TransferError::Storage(StorageError("boom".into())).http_status(),
            500
        );
        assert_eq!(TransferError::Timeout.http_status(), 504);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TransferError::InsufficientFunds(InsufficientFunds).to_string(),
            "account does not have sufficient funds"
        );
        assert_eq!(
            TransferError::AccountOriginNotFound.to_string(),
            "account origin not found"
        );
    }
}
