//! Integration tests for detection semantics and mapping statistics

use privault::core::VaultEngine;
use privault::store::MemoryStore;
use std::sync::Arc;

fn engine() -> VaultEngine {
    VaultEngine::new(Arc::new(MemoryStore::new())).unwrap()
}

#[tokio::test]
async fn test_category_precedence_disjoint_tokens() {
    let engine = engine();
    let anonymized = engine
        .anonymize("Call 123-456-7890 about jane@test.org")
        .await
        .unwrap();

    assert_eq!(anonymized.matches("PHONE_").count(), 1);
    assert_eq!(anonymized.matches("EMAIL_").count(), 1);
    assert!(!anonymized.contains("123-456-7890"));
    assert!(!anonymized.contains("jane@test.org"));
}

#[tokio::test]
async fn test_name_splits_into_independent_tokens() {
    let engine = engine();
    let anonymized = engine.anonymize("John Doe called").await.unwrap();

    let tokens: Vec<&str> = anonymized
        .split_whitespace()
        .filter(|w| w.starts_with("NAME_"))
        .collect();
    assert_eq!(tokens.len(), 2);
    assert_ne!(tokens[0], tokens[1]);

    let restored = engine.deanonymize(&anonymized).await.unwrap();
    assert_eq!(restored, "John Doe called");
}

#[tokio::test]
async fn test_stats_by_category() {
    let engine = engine();
    engine
        .anonymize("Contact John Doe at john.doe@example.com or call 555-123-4567")
        .await
        .unwrap();

    let stats = engine.stats().await.unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.by_category.email, 1);
    assert_eq!(stats.by_category.phone, 1);
    assert_eq!(stats.by_category.name, 2);
}

#[tokio::test]
async fn test_unresolvable_token_left_intact() {
    let engine = engine();
    let text = "see EMAIL_deadbeef for details";

    let restored = engine.deanonymize(text).await.unwrap();
    assert_eq!(restored, text);
}

#[tokio::test]
async fn test_malformed_token_syntax_ignored() {
    let engine = engine();
    // Wrong digest length and unknown category prefix are not token syntax.
    let text = "EMAIL_123 SSN_deadbeef EMAIL_deadbeefcafe";

    let restored = engine.deanonymize(text).await.unwrap();
    assert_eq!(restored, text);
}

#[tokio::test]
async fn test_detect_reports_without_mutation() {
    let engine = engine();
    let report = engine
        .detect("Contact John Doe at john.doe@example.com or call 555-123-4567")
        .unwrap();

    assert_eq!(report.emails, vec!["john.doe@example.com"]);
    assert_eq!(report.phones.len(), 1);
    assert!(report.phones[0].contains("555-123-4567"));
    assert_eq!(report.names, vec!["John Doe"]);

    // Detection never writes mappings.
    assert_eq!(engine.stats().await.unwrap().total, 0);
}

#[tokio::test]
async fn test_stoplist_words_not_treated_as_names() {
    let engine = engine();
    let report = engine.detect("Contact Email Phone").unwrap();
    assert!(report.names.is_empty());
}

#[tokio::test]
async fn test_accented_names_detected() {
    let engine = engine();
    let report = engine.detect("Saludos de María Ramírez").unwrap();
    assert_eq!(report.names, vec!["María Ramírez"]);
}

#[tokio::test]
async fn test_repeated_email_counted_once() {
    let engine = engine();
    engine
        .anonymize("jane@test.org and jane@test.org again")
        .await
        .unwrap();

    let stats = engine.stats().await.unwrap();
    assert_eq!(stats.total, 1);

    let mappings = engine.mappings().await.unwrap();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].usage_count, 2);
}
