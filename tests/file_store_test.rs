//! Integration tests for the durable file-backed mapping store

use privault::core::VaultEngine;
use privault::store::{FileStore, MappingStore};
use std::sync::Arc;
use tempfile::tempdir;

#[tokio::test]
async fn test_mappings_survive_engine_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mappings.json");

    let anonymized = {
        let store = Arc::new(FileStore::open(&path).unwrap());
        let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();
        engine
            .anonymize("reach jane@test.org or 555-123-4567")
            .await
            .unwrap()
    };

    // A fresh store over the same file resolves the old tokens.
    let store = Arc::new(FileStore::open(&path).unwrap());
    let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();

    let restored = engine.deanonymize(&anonymized).await.unwrap();
    assert_eq!(restored, "reach jane@test.org or 555-123-4567");
}

#[tokio::test]
async fn test_tokens_stable_across_restarts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mappings.json");

    let first = {
        let store = Arc::new(FileStore::open(&path).unwrap());
        let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();
        engine.anonymize("mail jane@test.org").await.unwrap()
    };

    let store = Arc::new(FileStore::open(&path).unwrap());
    let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();
    let second = engine.anonymize("mail jane@test.org").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(engine.stats().await.unwrap().total, 1);
}

#[tokio::test]
async fn test_usage_metadata_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mappings.json");

    {
        let store = Arc::new(FileStore::open(&path).unwrap());
        let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();
        engine.anonymize("jane@test.org").await.unwrap();
        engine.anonymize("jane@test.org").await.unwrap();
    }

    let store = Arc::new(FileStore::open(&path).unwrap());
    let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();

    let mappings = engine.mappings().await.unwrap();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].usage_count, 2);
}

#[tokio::test]
async fn test_reset_clears_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mappings.json");

    {
        let store = Arc::new(FileStore::open(&path).unwrap());
        let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();
        engine.anonymize("jane@test.org").await.unwrap();
        engine.reset().await.unwrap();
    }

    let store = Arc::new(FileStore::open(&path).unwrap());
    let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();
    assert_eq!(engine.stats().await.unwrap().total, 0);
}
