//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{PrivaultConfig, StoreBackend};
use crate::domain::errors::PrivaultError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`PrivaultConfig`]
/// 4. Applies environment variable overrides (`PRIVAULT_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is unset, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<PrivaultConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PrivaultError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PrivaultError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PrivaultConfig = toml::from_str(&contents)
        .map_err(|e| PrivaultError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        PrivaultError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Load the configuration file if present, falling back to defaults
///
/// The CLI uses this so that a bare invocation works without an `init` step;
/// a missing file is logged, not fatal.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PrivaultConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(PrivaultConfig::default())
    }
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PrivaultError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `PRIVAULT_*` prefix
///
/// For example: `PRIVAULT_STORE_BACKEND=memory`, `PRIVAULT_STORE_PATH=...`
fn apply_env_overrides(config: &mut PrivaultConfig) {
    if let Ok(val) = std::env::var("PRIVAULT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("PRIVAULT_STORE_BACKEND") {
        match val.to_lowercase().as_str() {
            "memory" => config.store.backend = StoreBackend::Memory,
            "file" => config.store.backend = StoreBackend::File,
            other => {
                tracing::warn!(backend = %other, "Ignoring unknown PRIVAULT_STORE_BACKEND");
            }
        }
    }
    if let Ok(val) = std::env::var("PRIVAULT_STORE_PATH") {
        config.store.path = Some(val);
    }

    if let Ok(val) = std::env::var("PRIVAULT_DETECTOR_PATTERN_LIBRARY") {
        config.detector.pattern_library = Some(val.into());
    }

    if let Ok(val) = std::env::var("PRIVAULT_LOGGING_LOCAL_ENABLED") {
        match val.parse() {
            Ok(parsed) => config.logging.local_enabled = parsed,
            Err(_) => {
                tracing::warn!(value = %val, "Ignoring unparsable PRIVAULT_LOGGING_LOCAL_ENABLED");
            }
        }
    }
    if let Ok(val) = std::env::var("PRIVAULT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
