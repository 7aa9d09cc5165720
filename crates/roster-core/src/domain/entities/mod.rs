//! Registry entities

pub mod group;
pub mod student;

pub use group::{GroupDetail, GroupSummary};
pub use student::Student;
