//! Token mapping entity and aggregate statistics
//!
//! [`TokenMapping`] is the only persistent entity in the vault. A mapping is
//! created on the first occurrence of a normalized value and only its usage
//! metadata changes afterwards; the `original` field is never overwritten.

use crate::domain::PiiCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persistent token -> original-value record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMapping {
    /// Prefixed token, e.g. `EMAIL_8004719c`. Unique, immutable.
    pub token: String,
    /// Exact value restored on deanonymization. First write wins.
    pub original: String,
    /// PII category the token belongs to
    pub category: PiiCategory,
    /// The 8-hex-character derivation digest (redundant with the token
    /// suffix, kept for inspection)
    pub digest: String,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Refreshed every time the token is regenerated or resolved
    pub last_used: DateTime<Utc>,
    /// How many times this token has been generated, >= 1
    pub usage_count: u64,
}

impl TokenMapping {
    /// Create a fresh mapping with usage count 1
    pub fn new(
        token: impl Into<String>,
        original: impl Into<String>,
        category: PiiCategory,
        digest: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            token: token.into(),
            original: original.into(),
            category,
            digest: digest.into(),
            created_at: now,
            last_used: now,
            usage_count: 1,
        }
    }

    /// Record one more generation of this token
    pub fn touch(&mut self) {
        self.usage_count += 1;
        self.last_used = Utc::now();
    }
}

/// Per-category mapping counts
///
/// A fixed struct rather than a map keeps the JSON shape stable
/// (`{"email": .., "phone": .., "name": ..}`) and the category branch
/// exhaustive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub email: u64,
    pub phone: u64,
    pub name: u64,
}

impl CategoryCounts {
    /// Increment the counter for a category
    pub fn increment(&mut self, category: PiiCategory) {
        match category {
            PiiCategory::Email => self.email += 1,
            PiiCategory::Phone => self.phone += 1,
            PiiCategory::Name => self.name += 1,
        }
    }

    /// Read the counter for a category
    pub fn get(&self, category: PiiCategory) -> u64 {
        match category {
            PiiCategory::Email => self.email,
            PiiCategory::Phone => self.phone,
            PiiCategory::Name => self.name,
        }
    }
}

/// Aggregate statistics over all stored mappings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingStats {
    /// Total number of stored mappings
    pub total: u64,
    /// Counts broken down by category
    pub by_category: CategoryCounts,
}

impl MappingStats {
    /// Compute stats from an iterator of mappings
    pub fn from_mappings<'a>(mappings: impl IntoIterator<Item = &'a TokenMapping>) -> Self {
        let mut stats = Self::default();
        for mapping in mappings {
            stats.total += 1;
            stats.by_category.increment(mapping.category);
        }
        stats
    }
}
