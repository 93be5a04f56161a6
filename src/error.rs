//! Error types for launch checks.
//!
//! This module defines [`LaunchError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LaunchError` for conditions that abort the run (bad input, bad config)
//! - Per-resource fetch problems are *not* errors; they are recorded as
//!   [`FetchFailure`](crate::fetch::FetchFailure) on the fetch result
//! - Use `anyhow::Error` (via `LaunchError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launch checks.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The domain or URL given on the command line is unusable.
    #[error("Invalid target '{input}': {reason}")]
    InvalidTarget { input: String, reason: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to set up HTTP client: {message}")]
    HttpClient { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaunchError {
    /// Shorthand for an [`LaunchError::InvalidTarget`].
    pub fn invalid_target(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for launch check operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_displays_input_and_reason() {
        let err = LaunchError::invalid_target("ht!tp://", "unsupported scheme");
        let msg = err.to_string();
        assert!(msg.contains("ht!tp://"));
        assert!(msg.contains("unsupported scheme"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = LaunchError::ConfigNotFound {
            path: PathBuf::from("/foo/launchcheck.yml"),
        };
        assert!(err.to_string().contains("/foo/launchcheck.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = LaunchError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = LaunchError::ConfigValidationError {
            message: "weights must sum to 100".into(),
        };
        assert!(err.to_string().contains("weights must sum to 100"));
    }

    #[test]
    fn http_client_error_displays_message() {
        let err = LaunchError::HttpClient {
            message: "no TLS backend".into(),
        };
        assert!(err.to_string().contains("no TLS backend"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: LaunchError = io_err.into();
        assert!(matches!(err, LaunchError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(LaunchError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
