//! Output management for CLI commands.
//!
//! Handles formatting and display for different output formats,
//! providing a unified interface for text and JSON output.

use crate::display::THEME;
use crate::error::{ErrorContext, ShapeError, ShapeResult};
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat, ResponseMeta};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// Manages output formatting and display.
///
/// Provides methods for outputting success results and errors in either
/// text or JSON format based on configuration.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    /// Create a new output manager with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager with custom writers.
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Raw stdout, for commands that stream their own text.
    pub fn stdout(&mut self) -> &mut dyn Write {
        &mut *self.stdout
    }

    /// Output a successful result.
    ///
    /// In JSON mode, wraps the data in a success response.
    /// In text mode, displays the data using its Display implementation.
    /// A failed write (closed pipe, full disk) comes back as `ShapeError::Io`.
    pub fn success<T>(&mut self, data: T) -> ShapeResult<ExitCode>
    where
        T: Serialize + Display,
    {
        self.write_success(&data).context("writing output")?;
        Ok(ExitCode::Success)
    }

    fn write_success<T>(&mut self, data: &T) -> io::Result<()>
    where
        T: Serialize + Display,
    {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::success(data).with_meta(ResponseMeta::now());
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stdout, "{data}")?;
            }
        }
        self.stdout.flush()
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &ShapeError) -> ShapeResult<ExitCode> {
        self.write_error(error).context("writing error output")?;
        Ok(ExitCode::from_error(error))
    }

    fn write_error(&mut self, error: &ShapeError) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::from_error(error);
                writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stderr, "{}", THEME.error_with_icon(&format!("Error: {error}")))?;
                for suggestion in error.recovery_suggestions() {
                    writeln!(self.stderr, "  Suggestion: {suggestion}")?;
                }
            }
        }
        self.stderr.flush()
    }

    /// Output informational message (text mode only).
    ///
    /// In JSON mode these are suppressed to keep stdout parseable.
    pub fn info(&mut self, message: &str) -> ShapeResult<()> {
        if matches!(self.format, OutputFormat::Text) {
            writeln!(self.stdout, "{message}")
                .and_then(|()| self.stdout.flush())
                .context("writing output")?;
        }
        Ok(())
    }
}
