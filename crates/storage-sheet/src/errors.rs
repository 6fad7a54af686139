//! Storage-specific error types for the sheet adapter.
//!
//! These wrap CSV and I/O failures and convert them to the storage-agnostic
//! error types defined in `inventaris_core`.

use inventaris_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Errors raised while reading or writing the sheet file.
///
/// Internal to the storage layer; converted to `inventaris_core::Error`
/// before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Sheet file could not be accessed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sheet file is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Sheet is missing the '{0}' column")]
    MissingColumn(String),

    /// `row` is the 1-based sheet row, header included.
    #[error("Row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("Background write task failed: {0}")]
    WriteTask(String),

    #[error("Core error: {0}")]
    CoreError(String),
}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::CoreError(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Database(DatabaseError::ConnectionFailed(e.to_string())),
            StorageError::Csv(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            e @ StorageError::MissingColumn(_) => Error::Repository(e.to_string()),
            e @ StorageError::Parse { .. } => Error::Repository(e.to_string()),
            StorageError::WriteTask(e) => Error::Database(DatabaseError::Internal(e)),
            StorageError::CoreError(e) => Error::Database(DatabaseError::Internal(e)),
        }
    }
}
