//! Error types for tablesnap
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for tablesnap
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Validation Errors
    // ============================================================================
    #[error("Invalid date '{value}'. Input should be '{format}'")]
    InvalidDate { value: String, format: String },

    #[error("Invalid date range: oldest {oldest} is after latest {latest}")]
    InvalidDateRange { oldest: String, latest: String },

    #[error("Unknown table '{table}'")]
    UnknownTable { table: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: String },

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Object store error: {0}")]
    Storage(#[from] object_store::Error),

    #[error("Invalid object path: {0}")]
    Path(#[from] object_store::path::Error),

    #[error("Refusing to issue a delete request with no keys")]
    EmptyDeleteRequest,

    // ============================================================================
    // Database Errors
    // ============================================================================
    #[error("Database error: {0}")]
    Database(#[from] duckdb::Error),

    // ============================================================================
    // I/O and Generic Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid-date error
    pub fn invalid_date(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            format: format.into(),
        }
    }

    /// Create an invalid-range error
    pub fn invalid_range(oldest: impl ToString, latest: impl ToString) -> Self {
        Self::InvalidDateRange {
            oldest: oldest.to_string(),
            latest: latest.to_string(),
        }
    }

    /// Create an unknown-table error
    pub fn unknown_table(table: impl Into<String>) -> Self {
        Self::UnknownTable {
            table: table.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing-environment-variable error
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnv { name: name.into() }
    }

    /// True if the failure was caught before any collaborator was invoked
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            Error::InvalidDate { .. } | Error::InvalidDateRange { .. } | Error::UnknownTable { .. }
        )
    }
}

/// Result type alias for tablesnap
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_date("20210709", "YYYY-MM-DD");
        assert_eq!(
            err.to_string(),
            "Invalid date '20210709'. Input should be 'YYYY-MM-DD'"
        );

        let err = Error::unknown_table("invalid_table_name");
        assert_eq!(err.to_string(), "Unknown table 'invalid_table_name'");

        let err = Error::missing_env("OUTPUT_URL");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: OUTPUT_URL"
        );
    }

    #[test]
    fn test_is_input_rejection() {
        assert!(Error::invalid_date("x", "YYYY-MM-DD").is_input_rejection());
        assert!(Error::invalid_range("2024-09-03", "2024-09-01").is_input_rejection());
        assert!(Error::unknown_table("nope").is_input_rejection());

        assert!(!Error::config("bad").is_input_rejection());
        assert!(!Error::EmptyDeleteRequest.is_input_rejection());
    }
}
