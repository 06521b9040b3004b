//! Error types for the EduDesk library.
//!
//! Store, cache and query operations are total: a missing id, an empty result or an
//! out-of-range page are ordinary outcomes reported through `bool`, `Option` or an
//! empty `Vec`. The [`EduDeskError`] enum covers the surrounding layer instead:
//! loading records and configuration, CLI arguments, and the index consistency
//! check used by tests.
//!
//! # Examples
//!
//! ```
//! use edudesk::error::{EduDeskError, Result};
//!
//! fn load_page_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(EduDeskError::invalid_config("page size must be positive"));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(load_page_size(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for EduDesk operations.
#[derive(Error, Debug)]
pub enum EduDeskError {
    /// I/O errors (reading record or config files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid arguments supplied by a caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested record or entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A secondary index disagrees with the primary record map.
    #[error("Index corruption: {0}")]
    IndexCorruption(String),
}

/// Result type alias for operations that may fail with EduDeskError.
pub type Result<T> = std::result::Result<T, EduDeskError>;

impl EduDeskError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        EduDeskError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        EduDeskError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        EduDeskError::NotFound(msg.into())
    }

    /// Create a new index corruption error.
    pub fn index_corruption<S: Into<String>>(msg: S) -> Self {
        EduDeskError::IndexCorruption(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = EduDeskError::invalid_config("search_ttl must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: search_ttl must be positive"
        );

        let error = EduDeskError::not_found("student 7");
        assert_eq!(error.to_string(), "Not found: student 7");

        let error = EduDeskError::index_corruption("status/active -> 3");
        assert_eq!(error.to_string(), "Index corruption: status/active -> 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = EduDeskError::from(io_error);

        match error {
            EduDeskError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<u64>>("[1, 2").unwrap_err();
        let error: EduDeskError = json_error.into();
        assert!(error.to_string().starts_with("JSON error:"));
    }
}
