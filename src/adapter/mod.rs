//! Adapters - concrete implementations of the ports

pub mod json_catalog;
pub mod memory;

pub use json_catalog::JsonFileCatalog;
pub use memory::InMemoryCatalog;
