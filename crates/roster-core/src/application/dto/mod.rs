//! Boundary DTOs for registry operations

pub mod group_dto;

pub use group_dto::CreateGroupRequest;
