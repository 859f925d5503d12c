//! In-memory mapping store
//!
//! Process-local store used by tests and library embedders that don't need
//! mappings to outlive the process.

use crate::domain::{MappingStats, PiiCategory, Result, TokenMapping};
use crate::store::MappingStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory [`MappingStore`] backed by a `HashMap`
///
/// The whole upsert runs under one write lock, so concurrent tokenizations
/// of the same value converge on a single mapping.
#[derive(Debug, Default)]
pub struct MemoryStore {
    mappings: RwLock<HashMap<String, TokenMapping>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn find_by_token(&self, token: &str) -> Result<Option<TokenMapping>> {
        let mappings = self.mappings.read().await;
        Ok(mappings.get(token).cloned())
    }

    async fn upsert(
        &self,
        token: &str,
        original: &str,
        category: PiiCategory,
        digest: &str,
    ) -> Result<TokenMapping> {
        let mut mappings = self.mappings.write().await;
        let mapping = mappings
            .entry(token.to_string())
            .and_modify(|m| m.touch())
            .or_insert_with(|| TokenMapping::new(token, original, category, digest));
        Ok(mapping.clone())
    }

    async fn all(&self) -> Result<Vec<TokenMapping>> {
        let mappings = self.mappings.read().await;
        let mut all: Vec<TokenMapping> = mappings.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn clear_all(&self) -> Result<()> {
        let mut mappings = self.mappings.write().await;
        mappings.clear();
        Ok(())
    }

    async fn stats(&self) -> Result<MappingStats> {
        let mappings = self.mappings.read().await;
        Ok(MappingStats::from_mappings(mappings.values()))
    }
}
