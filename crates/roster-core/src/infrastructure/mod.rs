//! Infrastructure layer - storage adapters and the HTTP surface

pub mod adapters;
pub mod http;

pub use adapters::InMemoryRegistry;
