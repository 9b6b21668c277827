//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success
//! - `1`: General error - unspecified failure
//! - `2`: Usage error (reserved for argument parsing, which clap reports)
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::ShapeError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Input values could not be parsed (code 4)
    InvalidInput = 4,

    /// File or stream I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl ExitCode {
    /// Convert a `ShapeError` to the appropriate exit code.
    pub fn from_error(error: &ShapeError) -> Self {
        match error {
            ShapeError::InvalidDimensions { .. } => ExitCode::InvalidInput,
            ShapeError::Config { .. } | ShapeError::ConfigExists { .. } => ExitCode::ConfigError,
            ShapeError::Io { .. } => ExitCode::IoError,
        }
    }
}
