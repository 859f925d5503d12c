//! File-backed mapping store
//!
//! Durable [`MappingStore`] that keeps the full mapping set in memory and
//! writes it through to a JSON document on every change. This is the
//! persistence the CLI uses so that mappings survive between invocations;
//! swapping in a database-backed store is a matter of implementing the same
//! trait.

use crate::domain::{MappingStats, PiiCategory, Result, StoreError, TokenMapping};
use crate::store::MappingStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// JSON-file-backed [`MappingStore`]
///
/// The mutex guard spans the whole read-modify-persist sequence, which makes
/// [`upsert`](MappingStore::upsert) atomic with respect to other callers on
/// the same store instance.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    mappings: Mutex<HashMap<String, TokenMapping>>,
}

impl FileStore {
    /// Open a file store, loading existing mappings if the file is present
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the file exists but cannot be
    /// read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mappings = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                StoreError::Unavailable(format!("failed to read {}: {e}", path.display()))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                StoreError::Unavailable(format!("failed to parse {}: {e}", path.display()))
            })?
        } else {
            HashMap::new()
        };

        tracing::debug!(path = %path.display(), "Opened file mapping store");

        Ok(Self {
            path,
            mappings: Mutex::new(mappings),
        })
    }

    /// Write the full mapping set to disk
    fn persist(&self, mappings: &HashMap<String, TokenMapping>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::PersistFailed(format!(
                        "failed to create {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(mappings)
            .map_err(|e| StoreError::PersistFailed(e.to_string()))?;

        // Write to a sibling temp file first so a crash mid-write cannot
        // truncate the live mapping set.
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(|e| {
            StoreError::PersistFailed(format!("failed to write {}: {e}", tmp_path.display()))
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            StoreError::PersistFailed(format!("failed to replace {}: {e}", self.path.display()))
        })?;

        Ok(())
    }
}

#[async_trait]
impl MappingStore for FileStore {
    async fn find_by_token(&self, token: &str) -> Result<Option<TokenMapping>> {
        let mappings = self.mappings.lock().await;
        Ok(mappings.get(token).cloned())
    }

    async fn upsert(
        &self,
        token: &str,
        original: &str,
        category: PiiCategory,
        digest: &str,
    ) -> Result<TokenMapping> {
        let mut mappings = self.mappings.lock().await;
        let mapping = mappings
            .entry(token.to_string())
            .and_modify(|m| m.touch())
            .or_insert_with(|| TokenMapping::new(token, original, category, digest))
            .clone();
        self.persist(&mappings)?;
        Ok(mapping)
    }

    async fn all(&self) -> Result<Vec<TokenMapping>> {
        let mappings = self.mappings.lock().await;
        let mut all: Vec<TokenMapping> = mappings.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn clear_all(&self) -> Result<()> {
        let mut mappings = self.mappings.lock().await;
        mappings.clear();
        self.persist(&mappings)?;
        tracing::info!(path = %self.path.display(), "Cleared all mappings");
        Ok(())
    }

    async fn stats(&self) -> Result<MappingStats> {
        let mappings = self.mappings.lock().await;
        Ok(MappingStats::from_mappings(mappings.values()))
    }
}
