//! Value objects for the registry domain

pub mod group_id;
pub mod student_id;

pub use group_id::GroupId;
pub use student_id::StudentId;
