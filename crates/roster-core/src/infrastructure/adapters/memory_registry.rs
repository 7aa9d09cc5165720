//! In-memory registry adapter
//!
//! The process-lifetime backing store for both collections. Students are
//! immutable after construction and need no lock; groups sit behind a
//! single `RwLock` so id assignment and the append happen under one write
//! guard and no caller observes a partially mutated collection.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::domain::{
    DomainResult,
    entities::{GroupSummary, Student},
    ports::{GroupStore, StudentDirectory},
    value_objects::{GroupId, StudentId},
};

/// In-memory implementation of both registry ports
#[derive(Debug, Clone)]
pub struct InMemoryRegistry {
    students: Arc<Vec<Student>>,
    groups: Arc<RwLock<Vec<GroupSummary>>>,
}

impl InMemoryRegistry {
    /// Create a registry with the given students and no groups
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students: Arc::new(students),
            groups: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a registry pre-populated with the fixed seed data
    ///
    /// Five students (ids 1-5) and two groups, exactly as every fresh
    /// process starts.
    pub fn with_seed_data() -> Self {
        let students = vec![
            Student::new(StudentId::new(1), "Alice"),
            Student::new(StudentId::new(2), "Bob"),
            Student::new(StudentId::new(3), "Charlie"),
            Student::new(StudentId::new(4), "David"),
            Student::new(StudentId::new(5), "Eve"),
        ];

        let groups = vec![
            GroupSummary::new(
                GroupId::new(1),
                "Group 1",
                vec![StudentId::new(1), StudentId::new(2), StudentId::new(4)],
            ),
            GroupSummary::new(
                GroupId::new(2),
                "Group 2",
                vec![StudentId::new(3), StudentId::new(5)],
            ),
        ];

        Self {
            students: Arc::new(students),
            groups: Arc::new(RwLock::new(groups)),
        }
    }

    /// Number of stored groups
    pub fn group_count(&self) -> usize {
        self.groups.read().len()
    }

    /// Clear all groups (for testing)
    pub fn clear_groups(&self) {
        self.groups.write().clear();
    }
}

#[async_trait]
impl StudentDirectory for InMemoryRegistry {
    async fn list_students(&self) -> DomainResult<Vec<Student>> {
        Ok(self.students.as_ref().clone())
    }

    async fn find_student(&self, id: StudentId) -> DomainResult<Option<Student>> {
        Ok(self.students.iter().find(|s| s.id() == id).cloned())
    }

    async fn find_student_by_name(&self, name: &str) -> DomainResult<Option<Student>> {
        Ok(self.students.iter().find(|s| s.name() == name).cloned())
    }
}

#[async_trait]
impl GroupStore for InMemoryRegistry {
    async fn list_groups(&self) -> DomainResult<Vec<GroupSummary>> {
        Ok(self.groups.read().clone())
    }

    async fn find_group(&self, id: GroupId) -> DomainResult<Option<GroupSummary>> {
        Ok(self.groups.read().iter().find(|g| g.id() == id).cloned())
    }

    async fn insert_group(
        &self,
        group_name: String,
        members: Vec<StudentId>,
    ) -> DomainResult<GroupSummary> {
        let mut groups = self.groups.write();

        // Id comes from the current count, not a monotonic counter. After a
        // deletion a later creation can repeat an id; that behavior is kept.
        let id = GroupId::new(groups.len() as u64 + 1);
        let group = GroupSummary::new(id, group_name, members);
        groups.push(group.clone());

        Ok(group)
    }

    async fn remove_group(&self, id: GroupId) -> DomainResult<usize> {
        let mut groups = self.groups.write();
        let before = groups.len();
        groups.retain(|g| g.id() != id);
        Ok(before - groups.len())
    }
}
