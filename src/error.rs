//! Error types for the Doxa library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`DoxaError`] enum.
//!
//! # Examples
//!
//! ```
//! use doxa::error::{DoxaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DoxaError::invalid_operation("probabilities() has not run"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Doxa operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for specific error kinds.
#[derive(Error, Debug)]
pub enum DoxaError {
    /// I/O errors (training-data file loading)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Operations invoked out of protocol order
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with DoxaError.
pub type Result<T> = std::result::Result<T, DoxaError>;

impl DoxaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DoxaError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        DoxaError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DoxaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = DoxaError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = DoxaError::invalid_operation("Test protocol error");
        assert_eq!(error.to_string(), "Invalid operation: Test protocol error");

        let error = DoxaError::other("Test other error");
        assert_eq!(error.to_string(), "Error: Test other error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let doxa_error = DoxaError::from(io_error);

        match doxa_error {
            DoxaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
