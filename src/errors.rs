//! # Application Error Types
//!
//! This module defines the error types used by the recipe translator.
//! Translation itself never fails; errors only surface while loading
//! configuration or an external lexicon file at startup.

use std::fmt;

/// General application error type for consistent error handling
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration validation errors
    Config(String),
    /// Lexicon table validation or parsing errors
    Lexicon(String),
    /// File system errors
    FileSystem(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "[CONFIG] {}", msg),
            AppError::Lexicon(msg) => write!(f, "[LEXICON] {}", msg),
            AppError::FileSystem(msg) => write!(f, "[FILESYSTEM] {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Standardized error logging utilities for consistent error reporting
pub mod error_logging {
    use tracing::error;

    /// Log lexicon loading errors with the offending source
    pub fn log_lexicon_error(error: &impl std::fmt::Display, operation: &str, source: &str) {
        error!(
            error = %error,
            operation = %operation,
            source = %source,
            "Lexicon loading failed"
        );
    }

    /// Log file system errors with path and operation context
    pub fn log_filesystem_error(
        error: &impl std::fmt::Display,
        operation: &str,
        path: Option<&str>,
    ) {
        error!(
            error = %error,
            operation = %operation,
            path = ?path,
            "File system operation failed"
        );
    }

    /// Log configuration errors during startup/initialization
    pub fn log_config_error(error: &impl std::fmt::Display, config_key: &str, operation: &str) {
        error!(
            error = %error,
            config_key = %config_key,
            operation = %operation,
            "Configuration error"
        );
    }

    /// Log input lines the CLI could not decode
    pub fn log_input_error(error: &impl std::fmt::Display, line_number: usize, input: &str) {
        error!(
            error = %error,
            line_number = %line_number,
            input = %if input.len() > 100 {
                format!("{}...", input.chars().take(100).collect::<String>())
            } else {
                input.to_string()
            },
            "Input line rejected"
        );
    }
}
