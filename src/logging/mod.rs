//! Structured logging and observability
//!
//! privault logs with the `tracing` crate. Console logging is always on;
//! JSON file logging with rotation is opt-in via `[logging]` in the
//! configuration. PII originals are never logged, only tokens and counts.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
