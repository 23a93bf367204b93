//! Error types for the Shelf core.
//!
//! Every error here is local and recoverable. A command that returns an
//! error has not mutated any state.

use crate::models::LendingStatus;
use thiserror::Error;

/// Main error type for the Shelf core.
#[derive(Debug, Error)]
pub enum ShelfError {
    // Catalog errors
    #[error("Book not found: {book_id}")]
    BookNotFound { book_id: String },

    // Lending errors
    #[error("Cannot {operation} book {book_id} while it is {status}")]
    InvalidTransition {
        book_id: String,
        status: LendingStatus,
        operation: String,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Input errors
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Library lock poisoned by a panicked command")]
    LockPoisoned,
}

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Coarse error classification handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidTransition,
    Configuration,
    OutOfRange,
    Validation,
    Internal,
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ShelfError {
    /// Shorthand for a missing book.
    pub fn not_found(book_id: impl Into<String>) -> Self {
        ShelfError::BookNotFound {
            book_id: book_id.into(),
        }
    }

    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ShelfError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShelfError::BookNotFound { .. } => ErrorKind::NotFound,
            ShelfError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            ShelfError::Config { .. } => ErrorKind::Configuration,
            ShelfError::OutOfRange { .. } => ErrorKind::OutOfRange,
            ShelfError::Validation { .. } => ErrorKind::Validation,
            ShelfError::Json { .. } | ShelfError::LockPoisoned => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShelfError::not_found("42");
        assert_eq!(err.to_string(), "Book not found: 42");

        let err = ShelfError::InvalidTransition {
            book_id: "7".into(),
            status: LendingStatus::Reserved,
            operation: "renew".into(),
        };
        assert_eq!(err.to_string(), "Cannot renew book 7 while it is reserved");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ShelfError::OutOfRange {
            field: "progress".into(),
            value: 1.5,
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(err.to_string(), "progress out of range: 1.5 (expected 0..=1)");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ShelfError::not_found("1").kind(), ErrorKind::NotFound);
        assert_eq!(
            ShelfError::Config {
                message: "zero target".into()
            }
            .kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            ShelfError::validation("rating", "must be 1-5").kind(),
            ErrorKind::Validation
        );
        assert_eq!(ShelfError::LockPoisoned.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_json_conversion() {
        let err: ShelfError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().starts_with("JSON error"));
    }
}
