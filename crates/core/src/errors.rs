//! Core error types for the inventory application.
//!
//! This module defines storage-agnostic error types. Adapter-specific errors
//! (CSV, I/O, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the inventory application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Depreciation failed: {0}")]
    Depreciation(#[from] DepreciationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The backing store could not be opened.
    #[error("Failed to open datastore: {0}")]
    ConnectionFailed(String),

    /// A read or write against the store failed.
    #[error("Datastore query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique key was violated (e.g., duplicate asset number).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Internal datastore error: {0}")]
    Internal(String),
}

/// Errors raised while preparing or running a depreciation evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepreciationError {
    /// The purchase month text matches none of the known month names.
    #[error("Unrecognised purchase month name '{0}'")]
    UnresolvedMonthName(String),

    /// Negative cost or depreciation amount reached the evaluation boundary.
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: String },

    /// The asset has no purchase year recorded.
    #[error("Asset {0} has no purchase year")]
    MissingPurchaseYear(String),

    /// The purchase year lies outside the supported calendar.
    #[error("Purchase year {year} is outside {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Cost divided by the monthly charge gives more months than the engine schedules.
    #[error("Depreciating {acquisition_cost} at {monthly_depreciation} per month exceeds {max_months} months")]
    ScheduleTooLong {
        acquisition_cost: String,
        monthly_depreciation: String,
        max_months: u32,
    },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
