//! Group entities: the stored summary and the derived detail view

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::Student,
    value_objects::{GroupId, StudentId},
};

/// A stored group record
///
/// Membership is kept as student ids, in the order the members were named
/// at creation. Duplicates are not prevented, and referential integrity to
/// students is not enforced after creation. A summary is never mutated in
/// place; groups are only appended and removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    id: GroupId,
    group_name: String,
    members: Vec<StudentId>,
}

impl GroupSummary {
    pub fn new(id: GroupId, group_name: impl Into<String>, members: Vec<StudentId>) -> Self {
        Self {
            id,
            group_name: group_name.into(),
            members,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn members(&self) -> &[StudentId] {
        &self.members
    }
}

/// A group with member ids resolved to full student records
///
/// Derived at read time, never stored. Member ids that resolve to no
/// student are dropped from the sequence rather than reported as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    id: GroupId,
    group_name: String,
    members: Vec<Student>,
}

impl GroupDetail {
    pub fn new(id: GroupId, group_name: impl Into<String>, members: Vec<Student>) -> Self {
        Self {
            id,
            group_name: group_name.into(),
            members,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn members(&self) -> &[Student] {
        &self.members
    }
}
