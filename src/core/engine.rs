//! Vault engine
//!
//! [`VaultEngine`] wires the detector, tokenizer, anonymizer and
//! deanonymizer to one mapping store and exposes the public operations:
//! anonymize, deanonymize, detect, stats, reset and mapping inspection.

use crate::core::anonymizer::Anonymizer;
use crate::core::deanonymizer::Deanonymizer;
use crate::core::detector::{patterns::PatternRegistry, DetectionReport, RegexDetector};
use crate::core::tokenizer::Tokenizer;
use crate::domain::{MappingStats, PrivaultError, Result, TokenMapping};
use crate::store::MappingStore;
use std::sync::Arc;

/// Facade over the anonymization pipeline
///
/// The engine is thread-safe; calls are independent per invocation and the
/// mapping store is the only shared mutable resource.
pub struct VaultEngine {
    store: Arc<dyn MappingStore>,
    detector: Arc<RegexDetector>,
    anonymizer: Anonymizer,
    deanonymizer: Deanonymizer,
}

impl VaultEngine {
    /// Create an engine with the built-in default patterns
    pub fn new(store: Arc<dyn MappingStore>) -> Result<Self> {
        Ok(Self::with_registry(store, PatternRegistry::default_patterns()?))
    }

    /// Create an engine with a custom pattern registry
    pub fn with_registry(store: Arc<dyn MappingStore>, registry: PatternRegistry) -> Self {
        let detector = Arc::new(RegexDetector::with_registry(registry));
        let tokenizer = Tokenizer::new(Arc::clone(&store));
        let anonymizer = Anonymizer::new(Arc::clone(&detector), tokenizer);
        let deanonymizer = Deanonymizer::new(Arc::clone(&store));
        Self {
            store,
            detector,
            anonymizer,
            deanonymizer,
        }
    }

    /// Replace every detected PII occurrence in `text` with a token
    ///
    /// # Errors
    ///
    /// Returns [`PrivaultError::Validation`] for empty or whitespace-only
    /// input. Mapping-store write failures degrade rather than fail: the
    /// token is still embedded and a warning is logged.
    pub async fn anonymize(&self, text: &str) -> Result<String> {
        validate_input(text)?;
        let result = self.anonymizer.anonymize(text).await?;
        tracing::debug!(
            input_len = text.len(),
            output_len = result.len(),
            changed = result != text,
            "Anonymized text"
        );
        Ok(result)
    }

    /// Restore original values for every resolvable token in `text`
    ///
    /// # Errors
    ///
    /// Returns [`PrivaultError::Validation`] for empty or whitespace-only
    /// input. Unknown tokens and per-token store failures are non-fatal and
    /// leave the token literally in the output.
    pub async fn deanonymize(&self, text: &str) -> Result<String> {
        validate_input(text)?;
        self.deanonymizer.deanonymize(text).await
    }

    /// Detection-only scan: unique matches per category, nothing written
    ///
    /// # Errors
    ///
    /// Returns [`PrivaultError::Validation`] for empty or whitespace-only
    /// input.
    pub fn detect(&self, text: &str) -> Result<DetectionReport> {
        validate_input(text)?;
        self.detector.detect(text)
    }

    /// Aggregate statistics over all stored mappings
    pub async fn stats(&self) -> Result<MappingStats> {
        self.store.stats().await
    }

    /// Clear the mapping store (test/debug utility)
    pub async fn reset(&self) -> Result<()> {
        self.store.clear_all().await
    }

    /// Look up a single token's mapping
    pub async fn mapping(&self, token: &str) -> Result<Option<TokenMapping>> {
        self.store.find_by_token(token).await
    }

    /// Return all stored mappings
    pub async fn mappings(&self) -> Result<Vec<TokenMapping>> {
        self.store.all().await
    }
}

/// Input validation shared by the text operations
fn validate_input(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(PrivaultError::Validation(
            "text must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}
