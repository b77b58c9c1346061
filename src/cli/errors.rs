//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use thiserror::Error;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or environment error
    ConfigError,
    /// File or runtime I/O error
    IoError,
    /// Database could not be opened or migrated
    BootFailed,
    /// Server stopped with an error
    ServeFailed,
    /// Seed import failed
    SeedFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "QUOTES_CLI_CONFIG_ERROR",
            Self::IoError => "QUOTES_CLI_IO_ERROR",
            Self::BootFailed => "QUOTES_CLI_BOOT_FAILED",
            Self::ServeFailed => "QUOTES_CLI_SERVE_FAILED",
            Self::SeedFailed => "QUOTES_CLI_SEED_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug, Error)]
#[error("{}: {}", .code.code(), .message)]
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

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    pub fn seed_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::SeedFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
