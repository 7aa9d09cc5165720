//! Domain layer - Pure registry logic
//!
//! Contains entities, value objects and the ports the registry needs from
//! its storage. No dependencies on transport concerns.

pub mod entities;
pub mod ports;
pub mod value_objects;

// Re-export core domain types
pub use entities::{GroupDetail, GroupSummary, Student};
pub use ports::{GroupStore, StudentDirectory};
pub use value_objects::{GroupId, StudentId};

/// Domain Result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A member name supplied to group creation matched no student
    #[error("Unknown member: {name}")]
    UnknownMember { name: String },

    /// The requested group id does not exist
    #[error("Group not found: {id}")]
    GroupNotFound { id: GroupId },
}

impl DomainError {
    pub fn unknown_member(name: impl Into<String>) -> Self {
        Self::UnknownMember { name: name.into() }
    }

    pub fn group_not_found(id: GroupId) -> Self {
        Self::GroupNotFound { id }
    }
}
