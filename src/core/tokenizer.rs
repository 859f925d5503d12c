//! Deterministic token derivation
//!
//! A token is `UPPERCASE(category) + "_" + first 8 hex chars of
//! SHA-256(lowercased storage key)`. The storage key and the value stored
//! for restoration deliberately differ for phones: formatting variants of
//! the same number must hash identically, but the original formatting must
//! round-trip byte for byte.

use crate::domain::PiiCategory;
use crate::store::MappingStore;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Derives tokens and records their mappings in the store
pub struct Tokenizer {
    store: Arc<dyn MappingStore>,
}

impl Tokenizer {
    /// Create a tokenizer over a mapping store
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Derive the token for a raw match and upsert its mapping
    ///
    /// Idempotent after the first write: the same normalized input always
    /// yields the same token, and repeated calls only bump usage metadata.
    ///
    /// A store failure does not fail the operation: the token is still
    /// returned (and will be substituted into the output), at the cost that
    /// a later deanonymization may not resolve it. Losing persistence is
    /// surfaced as a warning here and again at deanonymization time.
    pub async fn tokenize(&self, raw: &str, category: PiiCategory) -> String {
        let key = storage_key(raw, category);
        let original = restoration_value(raw, category);
        let digest = short_digest(&key);
        let token = format!("{}_{}", category.label(), digest);

        if let Err(e) = self
            .store
            .upsert(&token, &original, category, &digest)
            .await
        {
            tracing::warn!(
                token = %token,
                category = %category,
                error = %e,
                "Mapping write failed; token returned without a durable mapping"
            );
        }

        token
    }
}

/// Normalized value that gets hashed
///
/// Phones strip whitespace, hyphens and parentheses (a leading `+`
/// survives); emails and names hash the literal match. Lower-casing happens
/// in [`short_digest`].
fn storage_key(raw: &str, category: PiiCategory) -> String {
    match category {
        PiiCategory::Phone => raw
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
            .collect(),
        PiiCategory::Email | PiiCategory::Name => raw.to_string(),
    }
}

/// Value stored for restoration
///
/// Phones are trimmed (surrounding whitespace is preserved outside the
/// token by the anonymizer, so storing it too would duplicate it); emails
/// and names are stored literally.
fn restoration_value(raw: &str, category: PiiCategory) -> String {
    match category {
        PiiCategory::Phone => raw.trim().to_string(),
        PiiCategory::Email | PiiCategory::Name => raw.to_string(),
    }
}

/// First 8 hex characters of the SHA-256 of the lower-cased key
pub(crate) fn short_digest(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.to_lowercase().as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")[..8].to_string()
}
