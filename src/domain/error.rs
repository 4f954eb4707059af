//! Error types for the DevHub presentation engine.
//!
//! This module defines the centralized error type [`DevHubError`] and a type alias
//! [`Result`] used at the construction boundaries of the crate (opening the
//! preference file, parsing the catalog, loading configuration). The presentation
//! operations themselves never surface errors: they recover locally to a safe default.

use thiserror::Error;

/// The main error type for DevHub operations.
///
/// Most variants carry a description of what went wrong. I/O failures convert
/// automatically from `std::io::Error` via `#[from]`.
///
/// # Examples
///
/// ```
/// use devhub::DevHubError;
///
/// fn validate_config() -> Result<(), DevHubError> {
///     Err(DevHubError::Config("scroll threshold must be a number".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DevHubError {
    /// Preference storage operation failed.
    ///
    /// Occurs when the preference file cannot be parsed or serialized, or when a
    /// store refuses a write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The static record catalog is malformed.
    ///
    /// Raised when a dataset is not valid JSON or contains duplicate ids.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration is invalid or cannot be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for DevHub operations.
pub type Result<T> = std::result::Result<T, DevHubError>;
