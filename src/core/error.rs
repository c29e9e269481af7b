//! Typed error handling for the catalog engine
//!
//! # Error Categories
//!
//! - [`ValidationError`]: aggregate, multi-message failures from record and
//!   criterion validators
//! - [`QueryError`]: invalid query arguments and empty-record-set conditions,
//!   always detected before any data access
//! - [`StorageError`]: failures from the underlying data source, propagated
//!   unchanged and never retried
//!
//! Every failure is terminal for its call; nothing in the engine recovers
//! internally.

use std::fmt;

/// The main error type for the catalog engine
#[derive(Debug)]
pub enum CatalogError {
    /// Validation errors (record and criterion construction)
    Validation(ValidationError),

    /// Query errors (bad arguments, empty record set)
    Query(QueryError),

    /// Data source errors
    Storage(StorageError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Validation(e) => write!(f, "{}", e),
            CatalogError::Query(e) => write!(f, "{}", e),
            CatalogError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Validation(e) => Some(e),
            CatalogError::Query(e) => Some(e),
            CatalogError::Storage(e) => Some(e),
        }
    }
}

impl CatalogError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => "VALIDATION_ERROR",
            CatalogError::Query(QueryError::InvalidArgument(_)) => "INVALID_ARGUMENT",
            CatalogError::Query(QueryError::EmptyRecordSet) => "EMPTY_RECORD_SET",
            CatalogError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Shorthand for an invalid-argument query error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CatalogError::Query(QueryError::InvalidArgument(message.into()))
    }

    /// Wrap a data source failure without altering it
    pub fn storage(source: anyhow::Error) -> Self {
        CatalogError::Storage(StorageError {
            message: format!("{:#}", source),
        })
    }
}

/// Aggregate validation failure.
///
/// Collects every violated rule from a validation pass; the display form joins
/// all messages with newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// The individual rule violations, in the order they were detected
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join("\n"))
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised by query/aggregation operations before touching the data
/// source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A required operation input is invalid: inverted range bounds,
    /// non-positive price, or an unknown field name
    InvalidArgument(String),

    /// The operation needs at least one record (nearest-price search, average
    /// statistics) but the record set is empty
    EmptyRecordSet,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidArgument(message) => write!(f, "{}", message),
            QueryError::EmptyRecordSet => write!(f, "Record set is empty"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Opaque data source failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    message: String,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Storage error: {}", self.message)
    }
}

impl std::error::Error for StorageError {}
