//! Error types for Crypto World

use thiserror::Error;

use crate::newsletter::NewsletterError;

/// Main error type for Crypto World core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme name other than "dark" or "light"
    #[error("Invalid theme: {0} (expected \"dark\" or \"light\")")]
    InvalidTheme(String),

    /// Newsletter sign-up rejected the input
    #[error(transparent)]
    Newsletter(#[from] NewsletterError),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidTheme("purple".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid theme: purple (expected \"dark\" or \"light\")"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_newsletter_error_is_transparent() {
        let err: CoreError = NewsletterError::Empty.into();
        assert_eq!(err.to_string(), NewsletterError::Empty.to_string());
    }
}
