//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactId, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the contact store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No contact is stored under the id
    #[error("Contact {0} not found")]
    NotFound(ContactId),

    /// The candidate contact failed validation; nothing was stored
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur when building a search query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Empty query text
    #[error("Empty query; please provide a non-empty query text")]
    EmptyQuery,
}

/// Errors that can occur during CSV import or export.
#[derive(Error, Debug)]
pub enum TransferError {
    /// The import file does not exist
    #[error("{} file not found", .0.display())]
    FileNotFound(PathBuf),

    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV stream could not be read or written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// The current working directory cannot be determined
    #[error("Cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),
}

/// Errors raised while talking to the user.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Ctrl-C was pressed or input ended
    #[error("Interrupted")]
    Interrupted,

    /// Terminal I/O failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with TransferError
pub type TransferResult<T> = Result<T, TransferError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with PromptError
pub type PromptResult<T> = Result<T, PromptError>;
