//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "privault.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Pick a store backend ('file' or 'memory')");
                println!("  3. Anonymize some text: privault anonymize \"...\"");
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Privault Configuration File
# Reversible PII tokenization vault

[application]
name = "privault"
log_level = "info"

[store]
backend = "file"  # file | memory
path = "privault_mappings.json"

[detector]
# Optional: path to a custom pattern library
# pattern_library = "patterns/pii_patterns.toml"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Privault Configuration File
# Reversible PII tokenization vault
#
# Detected PII (emails, phone numbers, personal names) is replaced with
# deterministic tokens. The token-to-value mappings live in the store
# configured below and are required to restore the original text.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Application name (used in logging)
name = "privault"

# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Mapping Store
# ============================================================================
[store]
# Store backend: "file" persists mappings across runs, "memory" does not
backend = "file"

# Path of the JSON mapping file (file backend only)
path = "privault_mappings.json"

# ============================================================================
# Detection
# ============================================================================
[detector]
# Path to a custom pattern library. When unset the built-in patterns
# covering emails, phone numbers and capitalized names are used.
# pattern_library = "patterns/pii_patterns.toml"

# ============================================================================
# Logging
# ============================================================================
[logging]
# Enable local file logging (JSON lines, rotated)
local_enabled = false

# Directory for local log files
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "privault.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "privault.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config() {
        let config = InitArgs::generate_minimal_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[store]"));
        assert!(config.contains("[logging]"));
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config = InitArgs::generate_config_with_examples();
        assert!(config.contains("# Privault Configuration File"));
        assert!(config.contains("backend"));
        assert!(config.contains("pattern_library"));
    }

    #[test]
    fn test_minimal_config_parses() {
        let config = InitArgs::generate_minimal_config();
        let parsed: crate::config::PrivaultConfig = toml::from_str(&config).unwrap();
        assert_eq!(parsed.application.name, "privault");
    }
}
