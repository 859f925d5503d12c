//! Configuration schema types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Mapping store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local, lost at exit
    Memory,
    /// JSON document on disk, survives restarts
    #[default]
    File,
}

/// Main privault configuration
///
/// This is the root structure that maps to the TOML file. Every section has
/// defaults, so an empty file (or no file at all) yields a usable
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrivaultConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Mapping store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Detector settings
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PrivaultConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.store.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "invalid log_level '{}', must be one of: trace, debug, info, warn, error",
                self.log_level
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Mapping store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend to use (memory or file)
    #[serde(default)]
    pub backend: StoreBackend,

    /// Mapping file path (file backend only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl StoreConfig {
    /// Effective mapping file path for the file backend
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(
            self.path
                .clone()
                .unwrap_or_else(|| default_store_path().to_string()),
        )
    }

    fn validate(&self) -> Result<(), String> {
        if self.backend == StoreBackend::File {
            if let Some(path) = &self.path {
                if path.trim().is_empty() {
                    return Err("store.path must not be empty for the file backend".to_string());
                }
            }
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: None,
        }
    }
}

/// Detector configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetectorConfig {
    /// Optional pattern library TOML overriding the built-in patterns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_library: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for rolling log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !matches!(self.local_rotation.as_str(), "daily" | "hourly") {
            return Err(format!(
                "invalid local_rotation '{}', must be daily or hourly",
                self.local_rotation
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "privault".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_store_path() -> &'static str {
    "privault_mappings.json"
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
