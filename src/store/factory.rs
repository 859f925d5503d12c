//! Mapping store factory
//!
//! Creates the configured store backend behind the [`MappingStore`] trait.

use crate::config::schema::{PrivaultConfig, StoreBackend};
use crate::domain::Result;
use crate::store::{FileStore, MappingStore, MemoryStore};
use std::sync::Arc;

/// Create a mapping store based on the configuration
///
/// # Errors
///
/// Returns an error if a file-backed store cannot be opened.
pub fn create_store(config: &PrivaultConfig) -> Result<Arc<dyn MappingStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Creating in-memory mapping store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::File => {
            let path = config.store.resolved_path();
            tracing::info!(path = %path.display(), "Creating file mapping store");
            Ok(Arc::new(FileStore::open(path)?))
        }
    }
}
