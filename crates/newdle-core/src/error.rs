//! Error types for Newdle

use thiserror::Error;

/// Main error type for Newdle client operations
#[derive(Error, Debug)]
pub enum NewdleError {
    /// No poll with the given code is loaded
    #[error("Newdle not found: {0}")]
    NewdleNotFound(String),

    /// Error during local storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

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

    /// Session file could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Clipboard is missing or refused the write
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using NewdleError
pub type NewdleResult<T> = Result<T, NewdleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NewdleError::NewdleNotFound("dGz7FJzjKa".to_string());
        assert_eq!(format!("{}", err), "Newdle not found: dGz7FJzjKa");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NewdleError = io_err.into();
        assert!(matches!(err, NewdleError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: NewdleError = json_err.into();
        assert!(matches!(err, NewdleError::Serialization(_)));
    }
}
