//! Storage adapters

pub mod memory_registry;

pub use memory_registry::InMemoryRegistry;
