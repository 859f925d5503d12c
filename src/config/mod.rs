//! Configuration management for privault.
//!
//! TOML-based configuration with environment variable substitution
//! (`${VAR_NAME}`), `PRIVAULT_*` environment overrides, defaults for every
//! section, and validation on load.
//!
//! # Example configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [store]
//! backend = "file"
//! path = "privault_mappings.json"
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, DetectorConfig, LoggingConfig, PrivaultConfig, StoreBackend, StoreConfig,
};
