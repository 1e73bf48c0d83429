//! CLI-specific error types
//!
//! CLI errors terminate the process with a non-zero exit code.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Invalid command arguments
    InvalidArguments,
    /// Server failed to start
    BootFailed,
    /// `check` payload failed validation
    CheckFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "HR_CLI_CONFIG_ERROR",
            Self::InvalidArguments => "HR_CLI_INVALID_ARGUMENTS",
            Self::BootFailed => "HR_CLI_BOOT_FAILED",
            Self::CheckFailed => "HR_CLI_CHECK_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug, Clone)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Invalid arguments
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidArguments, msg)
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Check failed
    pub fn check_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::CheckFailed, msg)
    }

    /// Returns the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Returns the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
