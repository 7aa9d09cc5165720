//! Ports the registry requires from its storage

pub mod repositories;

pub use repositories::{GroupStore, StudentDirectory};
