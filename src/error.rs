//! Error types for the shapes crate
//!
//! The geometry itself never fails. Errors only appear at the edges:
//! parsing dimensions typed on the command line, loading configuration,
//! and writing output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for CLI-facing operations
#[derive(Error, Debug)]
pub enum ShapeError {
    /// Malformed `WIDTHxHEIGHT` text
    #[error("Invalid dimensions '{input}': {reason}")]
    InvalidDimensions { input: String, reason: String },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Configuration file already exists at '{path}'. Use --force to overwrite")]
    ConfigExists { path: PathBuf },

    /// File system and stream errors
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl ShapeError {
    /// Get a stable status code for this error type.
    ///
    /// Used in JSON responses for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::ConfigExists { .. } => "CONFIG_EXISTS",
            Self::Io { .. } => "IO_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::InvalidDimensions { .. } => vec![
                "Write rectangles as WIDTHxHEIGHT, for example 10x5 or 2.5x4",
                "Both sides must be numbers",
            ],
            Self::Config { .. } => vec![
                "Check .shapes/settings.toml for syntax errors",
                "Run 'shapes init --force' to regenerate the default configuration",
            ],
            Self::ConfigExists { .. } => vec!["Run 'shapes init --force' to overwrite it"],
            Self::Io { .. } => vec!["Check that the target exists and you have write permissions"],
        }
    }

    /// Wrap an I/O failure with what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

impl From<figment::Error> for ShapeError {
    fn from(e: figment::Error) -> Self {
        Self::Config {
            reason: e.to_string(),
        }
    }
}

/// Result type alias for shapes operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Helper trait for attaching what we were doing to an I/O failure
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ShapeResult<T>;
}

impl<T> ErrorContext<T> for Result<T, std::io::Error> {
    fn context(self, msg: &str) -> ShapeResult<T> {
        self.map_err(|e| ShapeError::io(msg, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_stable() {
        let err = ShapeError::InvalidDimensions {
            input: "10".to_string(),
            reason: "missing 'x' separator".to_string(),
        };
        assert_eq!(err.status_code(), "INVALID_DIMENSIONS");
        assert_eq!(
            err.to_string(),
            "Invalid dimensions '10': missing 'x' separator"
        );
        assert!(!err.recovery_suggestions().is_empty());
    }

    #[test]
    fn test_io_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        let err = result.context("writing report").unwrap_err();
        assert_eq!(err.status_code(), "IO_ERROR");
        assert!(err.to_string().contains("writing report"));
    }
}
