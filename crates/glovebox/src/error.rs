//! Error types for glovebox.
//!
//! Classification itself never fails: missing or malformed dates become status
//! buckets. These errors surface from the fallible edges around it, such as
//! parsing an anchor on request, loading configuration, or rendering output.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for glovebox operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Date Errors ===
    /// A date or timestamp string could not be parsed.
    #[error("invalid date '{input}': {message}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Description of what went wrong.
        message: String,
    },

    /// Calendar arithmetic left the representable date range.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// The configuration file does not exist.
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for glovebox operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a date out of range error.
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::DateOutOfRange(message.into())
    }

    /// Check if this error came from an unparseable date.
    #[must_use]
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }

    /// Check if this error is a configuration problem.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigLoad(_) | Self::ConfigValidation { .. } | Self::ConfigNotFound { .. }
        )
    }
}
