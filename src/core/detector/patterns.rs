//! Pattern library for PII detection

use crate::domain::{PiiCategory, PrivaultError, Result};
use fancy_regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this category
    pub patterns: Vec<String>,
    /// PII category label
    pub category: String,
}

/// Compiled pattern with its category
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex (fancy-regex, so lookahead is supported)
    pub regex: Regex,
    /// PII category
    pub category: PiiCategory,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Registry of compiled detection patterns, keyed by category
#[derive(Debug)]
pub struct PatternRegistry {
    patterns_by_category: HashMap<PiiCategory, Vec<CompiledPattern>>,
}

impl PatternRegistry {
    /// Load a pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            PrivaultError::Pattern(format!(
                "failed to read pattern library {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Build a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| PrivaultError::Pattern(format!("invalid pattern library: {e}")))?;

        let mut patterns_by_category: HashMap<PiiCategory, Vec<CompiledPattern>> = HashMap::new();

        for (name, def) in library.patterns {
            let category = PiiCategory::parse(&def.category).ok_or_else(|| {
                PrivaultError::Pattern(format!(
                    "unknown category in pattern '{name}': {}",
                    def.category
                ))
            })?;

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str).map_err(|e| {
                    PrivaultError::Pattern(format!("invalid regex in pattern '{name}': {e}"))
                })?;

                patterns_by_category
                    .entry(category)
                    .or_default()
                    .push(CompiledPattern { regex, category });
            }
        }

        // Every category needs at least one matcher; a registry with a hole
        // would silently skip a whole PII class.
        for category in PiiCategory::DETECTION_ORDER {
            if !patterns_by_category.contains_key(&category) {
                return Err(PrivaultError::Pattern(format!(
                    "pattern library has no patterns for category '{}'",
                    category.label()
                )));
            }
        }

        Ok(Self {
            patterns_by_category,
        })
    }

    /// Built-in default patterns, embedded at compile time
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get the compiled patterns for a category
    pub fn patterns_for_category(&self, category: PiiCategory) -> &[CompiledPattern] {
        self.patterns_by_category
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
