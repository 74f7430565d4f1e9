//! Error types for the Pierce oscillator calculator.
//!
//! The capacitor search itself is total over real inputs, so [`PierceError`]
//! only covers configuration mistakes made through the library API and
//! failures writing the report.

use thiserror::Error;

/// Result type alias using [`PierceError`].
pub type Result<T> = std::result::Result<T, PierceError>;

/// Unified error type for all calculator operations.
#[derive(Error, Debug)]
pub enum PierceError {
    /// Invalid search configuration
    #[error("Invalid search parameter: {message}")]
    InvalidSearchParam { message: String },

    /// Error writing the candidate table
    #[error("Output error: {message}")]
    OutputError { message: String },
}

impl PierceError {
    /// Create an invalid search parameter error
    pub fn invalid_search_param(message: impl Into<String>) -> Self {
        Self::InvalidSearchParam {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::OutputError {
            message: message.into(),
        }
    }
}
