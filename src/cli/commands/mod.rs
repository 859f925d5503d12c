//! CLI command implementations

pub mod anonymize;
pub mod deanonymize;
pub mod detect;
pub mod init;
pub mod reset;
pub mod stats;

use crate::config::{load_config_or_default, PrivaultConfig};
use crate::core::detector::patterns::PatternRegistry;
use crate::core::VaultEngine;
use crate::store::create_store;
use anyhow::Context;
use std::io::Read;

/// Load configuration (defaults if the file is missing) and build the engine
pub(crate) fn build_engine(config_path: &str) -> anyhow::Result<(PrivaultConfig, VaultEngine)> {
    let config = load_config_or_default(config_path)
        .with_context(|| format!("failed to load configuration from {config_path}"))?;

    let store = create_store(&config).context("failed to create mapping store")?;

    let engine = match &config.detector.pattern_library {
        Some(path) => {
            let registry = PatternRegistry::from_file(path)
                .with_context(|| format!("failed to load pattern library {}", path.display()))?;
            VaultEngine::with_registry(store, registry)
        }
        None => VaultEngine::new(store).context("failed to build engine")?,
    };

    Ok((config, engine))
}

/// Take the text from the argument or, if absent, from stdin
pub(crate) fn read_text(arg: Option<&str>) -> anyhow::Result<String> {
    match arg {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            Ok(buffer)
        }
    }
}
