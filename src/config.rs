//! Configuration module for the shapes CLI.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `SHAPES_` and use double
//! underscores to separate nested levels:
//! - `SHAPES_OUTPUT__FORMAT=json` sets `output.format`
//! - `SHAPES_LOGGING__LEVEL=debug` sets `logging.level`

use crate::error::{ErrorContext, ShapeError, ShapeResult};
use crate::io::OutputFormat;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the settings file, relative to the workspace root.
pub const CONFIG_DIR: &str = ".shapes";
pub const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "SHAPES_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root directory (where .shapes is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Inputs for the sample programs
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// "text" or "json"
    #[serde(default)]
    pub format: OutputFormat,

    /// Allow ANSI colors when stdout is a terminal
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "warn" or "shapes=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DemoConfig {
    /// `[width, height]` pairs for the floating-point sample
    #[serde(default = "default_rectangles")]
    pub rectangles: Vec<[f64; 2]>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_rectangles() -> Vec<[f64; 2]> {
    crate::demo::DEFAULT_RECTANGLES.to_vec()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rectangles: default_rectangles(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> ShapeResult<Self> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        let mut settings = Self::layered(&config_path)?;
        if settings.workspace_root.is_none() {
            settings.workspace_root = Self::workspace_root();
        }
        Ok(settings)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> ShapeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ShapeError::Config {
                reason: format!("configuration file '{}' does not exist", path.display()),
            });
        }
        Self::layered(path)
    }

    fn layered(path: &Path) -> ShapeResult<Self> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            // Double underscore separates nested levels; single underscores
            // stay inside field names.
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(ShapeError::from)
    }

    /// Find the settings file by looking for a .shapes directory
    /// from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where .shapes is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::workspace_root_from(&current)
    }

    fn workspace_root_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> ShapeResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("creating configuration directory")?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| ShapeError::Config {
            reason: e.to_string(),
        })?;
        std::fs::write(path, toml_string).context("writing configuration file")?;

        Ok(())
    }

    /// Create a default settings file with helpful comments in the
    /// current directory
    pub fn init_config_file(force: bool) -> ShapeResult<PathBuf> {
        let current_dir = std::env::current_dir().context("resolving current directory")?;
        Self::init_config_file_in(&current_dir, force)
    }

    /// Create a default settings file under `root/.shapes/`
    pub fn init_config_file_in(root: &Path, force: bool) -> ShapeResult<PathBuf> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(ShapeError::ConfigExists { path: config_path });
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("creating configuration directory")?;
        }

        let template = r#"# Shapes Configuration File

# Version of the configuration schema
version = 1

[output]
# Output format: "text" (default) or "json"
format = "text"

# Allow colored output when writing to a terminal
color = true

[logging]
# Log filter directive (RUST_LOG takes precedence)
# Examples: "warn", "info", "shapes=debug"
level = "warn"

[demo]
# [width, height] pairs used by `shapes demo cpp`
rectangles = [[10.0, 5.0], [3.0, 4.0]]
"#;

        std::fs::write(&config_path, template).context("writing configuration file")?;
        tracing::info!(path = %config_path.display(), force, "wrote default configuration");

        Ok(config_path)
    }
}
