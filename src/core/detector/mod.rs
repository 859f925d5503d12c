//! Regex-based PII detection
//!
//! The detector is pure: it reports matched spans and never touches the
//! mapping store.

pub mod patterns;

use crate::domain::{PiiCategory, PrivaultError, Result};
use patterns::PatternRegistry;
use serde::Serialize;
use std::sync::Arc;

/// One matched PII span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiiMatch {
    /// Category that matched
    pub category: PiiCategory,
    /// Matched substring, exactly as it appears in the text
    pub text: String,
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset of the match end
    pub end: usize,
}

/// Detection-only report: unique matches per category, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub names: Vec<String>,
}

impl DetectionReport {
    /// Whether any category matched
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty() && self.names.is_empty()
    }
}

/// Regex-based PII detector over a [`PatternRegistry`]
#[derive(Debug)]
pub struct RegexDetector {
    registry: Arc<PatternRegistry>,
}

impl RegexDetector {
    /// Create a detector with the built-in default patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            registry: Arc::new(PatternRegistry::default_patterns()?),
        })
    }

    /// Create a detector with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// All matches for one category, left to right, duplicates included
    pub fn matches(&self, text: &str, category: PiiCategory) -> Result<Vec<PiiMatch>> {
        let mut found = Vec::new();

        for pattern in self.registry.patterns_for_category(category) {
            for m in pattern.regex.find_iter(text) {
                let m = m.map_err(|e| {
                    PrivaultError::Pattern(format!(
                        "{} pattern failed to evaluate: {e}",
                        category.label()
                    ))
                })?;
                found.push(PiiMatch {
                    category,
                    text: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                });
            }
        }

        found.sort_by_key(|m| m.start);
        Ok(found)
    }

    /// Detection-only scan across all categories, deduplicated per category
    pub fn detect(&self, text: &str) -> Result<DetectionReport> {
        let mut report = DetectionReport::default();

        for category in PiiCategory::DETECTION_ORDER {
            let bucket = match category {
                PiiCategory::Email => &mut report.emails,
                PiiCategory::Phone => &mut report.phones,
                PiiCategory::Name => &mut report.names,
            };
            for m in self.matches(text, category)? {
                if !bucket.contains(&m.text) {
                    bucket.push(m.text);
                }
            }
        }

        Ok(report)
    }
}
