//! Repository ports for the registry collections
//!
//! These ports define the domain's requirements for its two collections,
//! allowing adapters to back them however they like and letting tests
//! inject a fresh instance per test.

use async_trait::async_trait;

use crate::domain::{
    DomainResult,
    entities::{GroupSummary, Student},
    value_objects::{GroupId, StudentId},
};

/// Read access to the seeded student collection
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// All students in seed order
    async fn list_students(&self) -> DomainResult<Vec<Student>>;

    /// Find a student by id
    async fn find_student(&self, id: StudentId) -> DomainResult<Option<Student>>;

    /// Find the first student whose name matches exactly (case-sensitive)
    async fn find_student_by_name(&self, name: &str) -> DomainResult<Option<Student>>;
}

/// Storage for group summaries
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// All groups in insertion order
    async fn list_groups(&self) -> DomainResult<Vec<GroupSummary>>;

    /// Find the first group with the given id
    async fn find_group(&self, id: GroupId) -> DomainResult<Option<GroupSummary>>;

    /// Append a new group, assigning its id from the current group count
    ///
    /// Id assignment and the append happen atomically with respect to other
    /// callers of this store.
    async fn insert_group(
        &self,
        group_name: String,
        members: Vec<StudentId>,
    ) -> DomainResult<GroupSummary>;

    /// Remove every group with the given id, returning how many were removed
    ///
    /// Removing an absent id is not an error.
    async fn remove_group(&self, id: GroupId) -> DomainResult<usize>;
}
