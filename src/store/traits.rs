//! Mapping store abstraction
//!
//! This trait is the persistence seam of the vault: the anonymizer and
//! deanonymizer only ever talk to a `dyn MappingStore`, so an in-memory
//! implementation and a durable one are interchangeable.

use crate::domain::{MappingStats, PiiCategory, Result, TokenMapping};
use async_trait::async_trait;

/// Key-value store holding token -> original-value records
///
/// Implementations must make [`upsert`](Self::upsert) atomic under
/// concurrent callers: two tokenizations of the same (category, normalized
/// value) pair must converge to one surviving mapping, never two rows with
/// different `created_at`/`usage_count`.
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Look up a mapping by its token
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails for reasons other than
    /// "not found".
    async fn find_by_token(&self, token: &str) -> Result<Option<TokenMapping>>;

    /// Atomically create a mapping or touch the existing one
    ///
    /// If the token is new, a mapping with `usage_count = 1` is created.
    /// If it exists, its usage count is incremented and `last_used`
    /// refreshed; the stored `original` is never overwritten (first write
    /// wins — a digest collision is treated as the same value).
    ///
    /// Returns the mapping as it stands after the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    async fn upsert(
        &self,
        token: &str,
        original: &str,
        category: PiiCategory,
        digest: &str,
    ) -> Result<TokenMapping>;

    /// Return all stored mappings
    async fn all(&self) -> Result<Vec<TokenMapping>>;

    /// Remove every mapping (test/debug utility)
    async fn clear_all(&self) -> Result<()>;

    /// Aggregate statistics over all stored mappings
    async fn stats(&self) -> Result<MappingStats>;
}
