//! Mapping store implementations
//!
//! The vault's only shared mutable state lives behind the [`MappingStore`]
//! trait. Two implementations ship with the crate: [`MemoryStore`] for
//! process-local use and tests, and [`FileStore`] for durable mappings.

pub mod factory;
pub mod file;
pub mod memory;
pub mod traits;

pub use factory::create_store;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::MappingStore;
