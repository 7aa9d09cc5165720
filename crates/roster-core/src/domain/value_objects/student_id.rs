//! Student ID Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for students
///
/// Student ids are assigned once at seed time and stay stable for the
/// process lifetime. On the wire they appear as bare JSON integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u64);

impl StudentId {
    /// Create a student ID from a raw integer
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StudentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<StudentId> for u64 {
    fn from(id: StudentId) -> Self {
        id.0
    }
}
