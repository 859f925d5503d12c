//! Token resolution and restoration
//!
//! Scans anonymized text for token syntax, resolves each unique token once
//! against the mapping store, and substitutes the originals back. Tokens are
//! mutually non-overlapping by construction (category prefix + content
//! digest, word-boundary anchored), so the order of per-token replacement
//! does not matter.

use crate::domain::Result;
use crate::store::MappingStore;
use regex::Regex;
use std::sync::Arc;

/// Token syntax produced by the tokenizer
const TOKEN_PATTERN: &str = r"\b(EMAIL|PHONE|NAME)_[a-f0-9]{8}\b";

/// Restores original values from anonymized text
pub struct Deanonymizer {
    store: Arc<dyn MappingStore>,
    token_pattern: Regex,
}

impl Deanonymizer {
    /// Create a deanonymizer over a mapping store
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self {
            store,
            token_pattern: Regex::new(TOKEN_PATTERN).unwrap(),
        }
    }

    /// Replace every resolvable token with its stored original
    ///
    /// Best-effort per token: an unknown token stays literally in the output
    /// (there is no safe fallback value), and a store read failure leaves
    /// that one token unresolved without affecting the others. Both cases
    /// log a warning.
    pub async fn deanonymize(&self, text: &str) -> Result<String> {
        let mut unique_tokens: Vec<String> = Vec::new();
        for m in self.token_pattern.find_iter(text) {
            let token = m.as_str().to_string();
            if !unique_tokens.contains(&token) {
                unique_tokens.push(token);
            }
        }

        if unique_tokens.is_empty() {
            return Ok(text.to_string());
        }

        let mut result = text.to_string();
        for token in &unique_tokens {
            match self.store.find_by_token(token).await {
                Ok(Some(mapping)) => {
                    result = result.replace(token.as_str(), &mapping.original);
                }
                Ok(None) => {
                    tracing::warn!(token = %token, "Token has no stored mapping; leaving it in place");
                }
                Err(e) => {
                    tracing::warn!(
                        token = %token,
                        error = %e,
                        "Mapping lookup failed; leaving token in place"
                    );
                }
            }
        }

        Ok(result)
    }
}
