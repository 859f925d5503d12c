//! Domain models and types for privault.
//!
//! The domain layer provides:
//! - The closed PII category set ([`PiiCategory`])
//! - The persistent mapping entity ([`TokenMapping`]) and its aggregate
//!   statistics ([`MappingStats`])
//! - Error types ([`PrivaultError`], [`StoreError`]) and the [`Result`] alias
//!
//! Tokens have the fixed ASCII format `<CATEGORY>_<8-hex>`, e.g.
//! `EMAIL_8004719c`. A token is a pure function of its category and the
//! normalized original value, so the same value always maps to the same
//! token, across processes and restarts.

pub mod category;
pub mod errors;
pub mod mapping;
pub mod result;

pub use category::PiiCategory;
pub use errors::{PrivaultError, StoreError};
pub use mapping::{CategoryCounts, MappingStats, TokenMapping};
pub use result::Result;
