//! Logger configuration
//!
//! A small value object: a minimum level name and a map from sink name to
//! file path. The `"main"` entry is mandatory (an empty path means "console
//! only"); an `"error"` entry adds a sink that only receives ERROR and FATAL
//! records.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Key of the primary file sink in [`Config::files`]
pub const MAIN_FILE_KEY: &str = "main";

/// Key of the error-only file sink in [`Config::files`]
pub const ERROR_FILE_KEY: &str = "error";

/// Configuration for a [`Logger`](crate::Logger)
///
/// # Example
///
/// ```
/// use rust_leveled_logger::Config;
///
/// let mut config = Config::default();
/// config.merge(&Config::new().with_level("debug").with_file("error", "logs/error.log"));
///
/// assert_eq!(config.level, "debug");
/// assert_eq!(config.files["main"], "");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum level name (`debug`, `info`, `warning`, `error`, `fatal`)
    #[serde(default = "default_level")]
    pub level: String,
    /// Sink name to file path
    #[serde(default = "default_files")]
    pub files: HashMap<String, String>,
}

impl Config {
    /// Create an empty configuration, useful as a set of overrides
    pub fn new() -> Self {
        Self {
            level: String::new(),
            files: HashMap::new(),
        }
    }

    /// Set the level name
    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Map a sink name to a file path
    #[must_use = "builder methods return a new value"]
    pub fn with_file(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.files.insert(name.into(), path.into());
        self
    }

    /// Apply `other` on top of this configuration
    ///
    /// A non-empty level replaces ours; file entries are merged key by key.
    pub fn merge(&mut self, other: &Config) {
        if !other.level.is_empty() {
            self.level = other.level.clone();
        }

        for (name, path) in &other.files {
            self.files.insert(name.clone(), path.clone());
        }
    }

    /// Check the level name and the presence of the `"main"` entry
    pub fn validate(&self) -> Result<()> {
        if self.level.parse::<LogLevel>().is_err() {
            return Err(LoggerError::config(
                "level",
                format!(
                    "'{}' is not one of debug, info, warning, error, fatal",
                    self.level
                ),
            ));
        }

        if !self.files.contains_key(MAIN_FILE_KEY) {
            return Err(LoggerError::config(
                "files",
                "path of the main log file is not specified",
            ));
        }

        Ok(())
    }

    /// Path of the primary file sink, if one is configured
    pub fn main_file(&self) -> Option<&str> {
        self.file(MAIN_FILE_KEY)
    }

    /// Path of the error-only file sink, if one is configured
    pub fn error_file(&self) -> Option<&str> {
        self.file(ERROR_FILE_KEY)
    }

    fn file(&self, name: &str) -> Option<&str> {
        self.files
            .get(name)
            .map(String::as_str)
            .filter(|path| !path.is_empty())
    }

    /// Parse a JSON document; absent keys take their default values
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading configuration", path.display().to_string(), e)
        })?;
        Self::from_json(&contents)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: default_level(),
            files: default_files(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_files() -> HashMap<String, String> {
    HashMap::from([(MAIN_FILE_KEY.to_string(), String::new())])
}
