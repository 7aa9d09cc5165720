//! Student entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StudentId;

/// A student record
///
/// Students are seeded at process start; no operation creates, mutates or
/// deletes one afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_wire_shape() {
        let student = Student::new(StudentId::new(1), "Alice");
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "name": "Alice"}));
    }
}
