//! Error types for the staff directory.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the model, the storage codec and the directory can report.

use std::path::Path;

use thiserror::Error;

/// The main error type for the staff directory.
///
/// # Example
///
/// ```
/// use staff_directory::error::DirectoryError;
///
/// let error = DirectoryError::DuplicateId {
///     id: "E001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee ID already exists: E001");
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A field value was rejected before any mutation took place.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An employee with the same ID is already present in the directory.
    #[error("Employee ID already exists: {id}")]
    DuplicateId {
        /// The conflicting ID.
        id: String,
    },

    /// No employee with the given ID exists.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The ID that was looked up.
        id: String,
    },

    /// A stored line could not be turned into an employee.
    #[error("Failed to parse line {line_number}: {message}")]
    ParseError {
        /// One-based line number within the data file.
        line_number: usize,
        /// A description of the parse error.
        message: String,
    },

    /// The data file could not be created, read or written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file involved.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl DirectoryError {
    /// Builds a [`DirectoryError::InvalidEmployee`] for the given field.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEmployee {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path it happened on.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Returns true for validation failures (bad field values, duplicate IDs).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DirectoryError::InvalidEmployee { .. } | DirectoryError::DuplicateId { .. }
        )
    }
}

/// A type alias for Results that return DirectoryError.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
