//! Core anonymization pipeline
//!
//! Leaf-first: the [`detector`] finds PII spans, the [`tokenizer`] derives
//! deterministic tokens and records mappings, the [`anonymizer`] substitutes
//! tokens into text, the [`deanonymizer`] restores originals, and the
//! [`engine`] ties them to one mapping store.

pub mod anonymizer;
pub mod deanonymizer;
pub mod detector;
pub mod engine;
pub mod tokenizer;

pub use anonymizer::Anonymizer;
pub use deanonymizer::Deanonymizer;
pub use detector::{DetectionReport, PiiMatch, RegexDetector};
pub use engine::VaultEngine;
pub use tokenizer::Tokenizer;
