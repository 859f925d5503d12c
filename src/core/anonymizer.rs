//! Anonymization passes
//!
//! Categories are substituted in the fixed order phones -> emails -> names,
//! each pass operating on the output of the previous one. Within a pass,
//! matches are replaced first-match-first, left to right.

use crate::core::detector::RegexDetector;
use crate::core::tokenizer::Tokenizer;
use crate::domain::{PiiCategory, Result};
use std::sync::Arc;

/// Replaces detected PII with tokens
pub struct Anonymizer {
    detector: Arc<RegexDetector>,
    tokenizer: Tokenizer,
}

impl Anonymizer {
    /// Create an anonymizer from a detector and tokenizer
    pub fn new(detector: Arc<RegexDetector>, tokenizer: Tokenizer) -> Self {
        Self {
            detector,
            tokenizer,
        }
    }

    /// Replace every detected PII occurrence with its token
    ///
    /// Text with no PII comes back unchanged. Mapping-store write failures
    /// are absorbed by the tokenizer, so this only fails if a pattern fails
    /// to evaluate.
    pub async fn anonymize(&self, text: &str) -> Result<String> {
        let mut result = text.to_string();
        for category in PiiCategory::DETECTION_ORDER {
            result = self.apply_pass(&result, category).await?;
        }
        Ok(result)
    }

    /// Replace all matches of one category in one left-to-right traversal
    async fn apply_pass(&self, text: &str, category: PiiCategory) -> Result<String> {
        let matches = self.detector.matches(text, category)?;
        if matches.is_empty() {
            return Ok(text.to_string());
        }

        let mut result = text.to_string();
        for m in &matches {
            let replacement = match category {
                PiiCategory::Phone => {
                    // The phone pattern's character class includes spaces, so
                    // the raw match may carry surrounding whitespace. Keep it
                    // outside the token; the trimmed core is what gets
                    // hashed and stored.
                    let leading = leading_whitespace(&m.text);
                    let trailing = trailing_whitespace(&m.text);
                    let token = self.tokenizer.tokenize(&m.text, category).await;
                    format!("{leading}{token}{trailing}")
                }
                PiiCategory::Email => self.tokenizer.tokenize(&m.text, category).await,
                PiiCategory::Name => {
                    // Each word of a matched name becomes its own token.
                    let mut tokens = Vec::new();
                    for part in m.text.split_whitespace() {
                        tokens.push(self.tokenizer.tokenize(part, category).await);
                    }
                    tokens.join(" ")
                }
            };
            result = replace_first(&result, &m.text, &replacement);
        }

        tracing::debug!(
            category = %category,
            matches = matches.len(),
            "Applied anonymization pass"
        );

        Ok(result)
    }
}

/// Leading whitespace of a matched span
fn leading_whitespace(s: &str) -> &str {
    &s[..s.len() - s.trim_start().len()]
}

/// Trailing whitespace of a matched span
fn trailing_whitespace(s: &str) -> &str {
    &s[s.trim_end().len()..]
}

/// Replace the first occurrence of `needle` in `haystack`
fn replace_first(haystack: &str, needle: &str, replacement: &str) -> String {
    match haystack.find(needle) {
        Some(pos) => {
            let mut result = String::with_capacity(haystack.len() + replacement.len());
            result.push_str(&haystack[..pos]);
            result.push_str(replacement);
            result.push_str(&haystack[pos + needle.len()..]);
            result
        }
        None => haystack.to_string(),
    }
}
