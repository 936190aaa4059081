//! Error types for jokebox.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! Joke fetching never surfaces these: every fetch failure is absorbed into a
//! [`FetchResult`](crate::core::models::FetchResult). The variants here cover
//! the application around it (configuration, calculator input, I/O, and the
//! final "some fetches failed" outcome of the CLI).
//!
//! ## Error Taxonomy
//!
//! - **Network**: HTTP client construction, failed joke fetches
//! - **Configuration**: Config file parsing, validation, or invalid values
//! - **Input**: Calculator domain and arity errors, unknown operations
//! - **Internal**: I/O and serialization failures
//!
//! Each error has a stable error code (e.g., `JBX-C001`) for programmatic handling.

use thiserror::Error;

use crate::calc::CalcError;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network issues (client setup, remote API failures).
    Network,
    /// Configuration issues (parse errors, invalid values, missing files).
    Configuration,
    /// Invalid user input to the calculator.
    Input,
    /// Internal errors (I/O, serialization, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Network => "Network error",
            Self::Configuration => "Configuration error",
            Self::Input => "Input error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Network => "N",
            Self::Configuration => "C",
            Self::Input => "I",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// One or more joke fetches failed
    FetchFailed = 2,
    /// Config file or config value invalid
    ConfigError = 3,
    /// Calculator input rejected
    InvalidInput = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for jokebox operations.
#[derive(Error, Debug)]
pub enum JokeboxError {
    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // ==========================================================================
    // Network errors (Category: Network)
    // ==========================================================================
    /// HTTP client could not be built.
    #[error("network error: {0}")]
    Network(String),

    /// Some joke fetches returned an unsuccessful result.
    #[error("{failed} of {total} joke fetch(es) failed")]
    FetchFailed { failed: usize, total: usize },

    // ==========================================================================
    // Input errors (Category: Input)
    // ==========================================================================
    /// Calculator rejected its operands.
    #[error(transparent)]
    Calc(#[from] CalcError),

    // ==========================================================================
    // Internal errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JokeboxError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::ConfigParse { .. } | Self::ConfigInvalid { .. } | Self::Config(_) => {
                ExitCode::ConfigError
            }
            Self::FetchFailed { .. } => ExitCode::FetchFailed,
            Self::Calc(_) => ExitCode::InvalidInput,
            Self::Network(_) | Self::Io(_) | Self::Json(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigParse { .. } | Self::ConfigInvalid { .. } | Self::Config(_) => {
                ErrorCategory::Configuration
            }
            Self::Network(_) | Self::FetchFailed { .. } => ErrorCategory::Network,
            Self::Calc(_) => ErrorCategory::Input,
            Self::Io(_) | Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `JBX-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse { .. } => "JBX-C001",
            Self::ConfigInvalid { .. } => "JBX-C002",
            Self::Config(_) => "JBX-C099",
            Self::Network(_) => "JBX-N001",
            Self::FetchFailed { .. } => "JBX-N002",
            Self::Calc(_) => "JBX-I001",
            Self::Io(_) => "JBX-X001",
            Self::Json(_) => "JBX-X002",
        }
    }
}

/// Result type alias using `JokeboxError`.
pub type Result<T> = std::result::Result<T, JokeboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_map_to_config_exit_code() {
        let err = JokeboxError::ConfigInvalid {
            key: "api.timeout_seconds".to_string(),
            value: "0".to_string(),
            message: "must be between 1 and 60".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::ConfigError);
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.error_code(), "JBX-C002");
        assert!(err.to_string().contains("api.timeout_seconds"));
    }

    #[test]
    fn fetch_failed_reports_counts() {
        let err = JokeboxError::FetchFailed {
            failed: 1,
            total: 3,
        };
        assert_eq!(err.exit_code(), ExitCode::FetchFailed);
        assert_eq!(err.to_string(), "1 of 3 joke fetch(es) failed");
    }

    #[test]
    fn calc_errors_are_input_errors() {
        let err: JokeboxError = CalcError::DivisionByZero.into();
        assert_eq!(err.exit_code(), ExitCode::InvalidInput);
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.to_string(), "Division by zero.");
    }

    #[test]
    fn io_errors_are_internal() {
        let err: JokeboxError = std::io::Error::other("disk gone").into();
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
        assert_eq!(err.category().code_prefix(), "X");
    }

    #[test]
    fn exit_code_converts_to_i32() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::InvalidInput), 4);
    }
}
