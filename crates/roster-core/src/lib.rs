//! # Roster Core
//!
//! Core types and services for the roster registry: an in-memory collection
//! of students and groups exposed over an HTTP/JSON surface. The registry is
//! owned by a single service value constructed at startup and injected into
//! the transport layer, so tests can run against a fresh instance each time.

#![warn(rust_2018_idioms)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Domain layer exports
pub use domain::{
    DomainError, DomainResult,
    entities::{GroupDetail, GroupSummary, Student},
    ports::{GroupStore, StudentDirectory},
    value_objects::{GroupId, StudentId},
};

// Application layer exports
pub use application::{dto::CreateGroupRequest, services::RegistryService};

// Infrastructure exports
pub use infrastructure::{
    adapters::InMemoryRegistry,
    http::{ApiError, AppState, api_router},
};

// Configuration exports
pub use config::ServerConfig;

/// Re-export commonly used types
pub mod prelude {
    pub use super::{
        ApiError,
        AppState,
        CreateGroupRequest,
        DomainError,
        DomainResult,
        GroupDetail,
        GroupId,
        GroupStore,
        GroupSummary,
        InMemoryRegistry,
        RegistryService,
        ServerConfig,
        Student,
        StudentDirectory,
        StudentId,
        api_router,
    };
}
