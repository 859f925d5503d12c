//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for privault using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// privault - reversible PII tokenization vault
#[derive(Parser, Debug)]
#[command(name = "privault")]
#[command(version, about, long_about = None)]
#[command(author = "Privault Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "privault.toml", env = "PRIVAULT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PRIVAULT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace detected PII in text with tokens
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Restore original values for tokens in text
    Deanonymize(commands::deanonymize::DeanonymizeArgs),

    /// Report detected PII without modifying anything
    Detect(commands::detect::DetectArgs),

    /// Show mapping statistics
    Stats(commands::stats::StatsArgs),

    /// Clear all stored mappings
    Reset(commands::reset::ResetArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_anonymize() {
        let cli = Cli::parse_from(["privault", "anonymize", "some text"]);
        assert_eq!(cli.config, "privault.toml");
        assert!(matches!(cli.command, Commands::Anonymize(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["privault", "--config", "custom.toml", "stats"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["privault", "--log-level", "debug", "reset", "--yes"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_detect_json() {
        let cli = Cli::parse_from(["privault", "detect", "--json", "text"]);
        match cli.command {
            Commands::Detect(args) => assert!(args.json),
            _ => panic!("expected detect command"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["privault", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
