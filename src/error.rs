//! Custom error types for My Pocket
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for My Pocket operations
#[derive(Error, Debug)]
pub enum PocketError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Backup import errors (restore left the store untouched)
    #[error("Import error: {0}")]
    Import(String),

    /// Backup export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The assistant responded but the response could not be used
    #[error("Assistant error: {0}")]
    Assistant(String),

    /// The assistant service could not be reached at all.
    ///
    /// Distinct from a successful "I did not understand" classification:
    /// callers surface this as a connectivity/configuration problem.
    #[error("Assistant unreachable: {0}")]
    AssistantUnreachable(String),

    /// Operation requires a premium plan
    #[error("Upgrade required: {0}")]
    Upgrade(String),
}

impl PocketError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for saving goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "SavingGoal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is the unreachable-service sentinel
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::AssistantUnreachable(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PocketError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for My Pocket operations
pub type PocketResult<T> = Result<T, PocketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PocketError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = PocketError::account_not_found("Cash");
        assert_eq!(err.to_string(), "Account not found: Cash");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unreachable_is_distinct_from_assistant_error() {
        let unreachable = PocketError::AssistantUnreachable("timeout".into());
        let malformed = PocketError::Assistant("bad response".into());
        assert!(unreachable.is_unreachable());
        assert!(!malformed.is_unreachable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let pocket_err: PocketError = io_err.into();
        assert!(matches!(pocket_err, PocketError::Io(_)));
    }
}
