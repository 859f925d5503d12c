// Privault - Reversible PII Tokenization Vault
// Copyright (c) 2025 Privault Contributors
// Licensed under the MIT License

//! # Privault - Reversible PII Tokenization Vault
//!
//! Privault detects personally identifiable information (emails, phone
//! numbers, personal names) in free text and replaces it with deterministic
//! tokens. The token-to-value mappings are kept in a mapping store so the
//! original text can be restored later.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** PII with a configurable pattern library
//! - **Anonymizing** text by replacing each PII value with a stable token
//! - **Restoring** anonymized text by resolving tokens against the store
//! - **Persisting** token mappings in memory or in a JSON file
//!
//! ## Architecture
//!
//! Privault follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (detection, tokenization, restoration)
//! - [`store`] - Mapping store backends (memory, file)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use privault::core::VaultEngine;
//! use privault::store::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = VaultEngine::new(Arc::new(MemoryStore::new()))?;
//!
//!     let anonymized = engine
//!         .anonymize("Contact alice@example.com for details")
//!         .await?;
//!     assert!(anonymized.contains("EMAIL_"));
//!
//!     let restored = engine.deanonymize(&anonymized).await?;
//!     assert!(restored.contains("alice@example.com"));
//!     Ok(())
//! }
//! ```
//!
//! ## Tokens
//!
//! Tokens have the form `CATEGORY_DIGEST`, where `CATEGORY` is one of
//! `EMAIL`, `PHONE` or `NAME` and `DIGEST` is the first 8 hex characters of
//! the SHA-256 of the normalized value. The same value always yields the
//! same token, across runs and across engine instances sharing a store.
//!
//! ## Error Handling
//!
//! Privault uses the [`domain::PrivaultError`] type for all errors:
//!
//! ```rust,no_run
//! use privault::domain::PrivaultError;
//!
//! fn example() -> Result<(), PrivaultError> {
//!     let config = privault::config::load_config("privault.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Privault uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting anonymization");
//! warn!(token = "EMAIL_1a2b3c4d", "Token not found in store");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod store;
