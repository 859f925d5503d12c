//! Integration tests for behavior under mapping-store failures
//!
//! Write failures during anonymize must not lose the token substitution,
//! and a read failure for one token during deanonymize must not affect the
//! others.

use async_trait::async_trait;
use privault::core::VaultEngine;
use privault::domain::{MappingStats, PiiCategory, Result, StoreError, TokenMapping};
use privault::store::{MappingStore, MemoryStore};
use std::sync::Arc;

/// Store that can be told to fail writes, or reads of one specific token
struct UnreliableStore {
    inner: MemoryStore,
    fail_writes: bool,
    fail_reads_for: Option<String>,
}

impl UnreliableStore {
    fn failing_writes() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_writes: true,
            fail_reads_for: None,
        }
    }

    fn failing_reads_for(token: &str) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_writes: false,
            fail_reads_for: Some(token.to_string()),
        }
    }
}

#[async_trait]
impl MappingStore for UnreliableStore {
    async fn find_by_token(&self, token: &str) -> Result<Option<TokenMapping>> {
        if self.fail_reads_for.as_deref() == Some(token) {
            return Err(StoreError::ReadFailed("connection lost".to_string()).into());
        }
        self.inner.find_by_token(token).await
    }

    async fn upsert(
        &self,
        token: &str,
        original: &str,
        category: PiiCategory,
        digest: &str,
    ) -> Result<TokenMapping> {
        if self.fail_writes {
            return Err(StoreError::WriteFailed("disk full".to_string()).into());
        }
        self.inner.upsert(token, original, category, digest).await
    }

    async fn all(&self) -> Result<Vec<TokenMapping>> {
        self.inner.all().await
    }

    async fn clear_all(&self) -> Result<()> {
        self.inner.clear_all().await
    }

    async fn stats(&self) -> Result<MappingStats> {
        self.inner.stats().await
    }
}

#[tokio::test]
async fn test_anonymize_embeds_token_despite_write_failure() {
    let store = Arc::new(UnreliableStore::failing_writes());
    let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();

    let anonymized = engine.anonymize("mail jane@test.org").await.unwrap();
    assert!(anonymized.contains("EMAIL_"));
    assert!(!anonymized.contains("jane@test.org"));

    // Nothing was persisted.
    assert_eq!(engine.stats().await.unwrap().total, 0);
}

#[tokio::test]
async fn test_token_identical_with_and_without_working_store() {
    // Token derivation is pure, so a write failure must not change the
    // token that gets embedded.
    let degraded = VaultEngine::new(
        Arc::new(UnreliableStore::failing_writes()) as Arc<dyn MappingStore>
    )
    .unwrap();
    let healthy = VaultEngine::new(Arc::new(MemoryStore::new())).unwrap();

    let from_degraded = degraded.anonymize("mail jane@test.org").await.unwrap();
    let from_healthy = healthy.anonymize("mail jane@test.org").await.unwrap();
    assert_eq!(from_degraded, from_healthy);
}

#[tokio::test]
async fn test_deanonymize_read_failure_only_affects_that_token() {
    let store = UnreliableStore::failing_reads_for("EMAIL_00000001");
    store
        .upsert("EMAIL_00000001", "a@b.com", PiiCategory::Email, "00000001")
        .await
        .unwrap();
    store
        .upsert("PHONE_00000002", "555-123-4567", PiiCategory::Phone, "00000002")
        .await
        .unwrap();

    let engine = VaultEngine::new(Arc::new(store) as Arc<dyn MappingStore>).unwrap();

    // The unreadable token stays literal; the other one still resolves.
    let restored = engine
        .deanonymize("mail EMAIL_00000001, call PHONE_00000002")
        .await
        .unwrap();
    assert_eq!(restored, "mail EMAIL_00000001, call 555-123-4567");
}

#[tokio::test]
async fn test_deanonymize_survives_read_failure_without_error() {
    let store = Arc::new(UnreliableStore::failing_reads_for("EMAIL_deadbeef"));
    let engine = VaultEngine::new(store as Arc<dyn MappingStore>).unwrap();

    let text = "see EMAIL_deadbeef for details";
    let restored = engine.deanonymize(text).await.unwrap();
    assert_eq!(restored, text);
}
