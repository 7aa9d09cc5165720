//! Registry service
//!
//! Orchestrates the five registry operations over the storage ports. Name
//! resolution for creation is strict (any unresolved name fails the whole
//! operation before anything is stored); id resolution for the detail view
//! is lenient (unresolved ids are dropped from the output). That asymmetry
//! is part of the service contract.

use tracing::{debug, info};

use crate::{
    application::dto::CreateGroupRequest,
    domain::{
        DomainError, DomainResult,
        entities::{GroupDetail, GroupSummary, Student},
        ports::{GroupStore, StudentDirectory},
        value_objects::GroupId,
    },
};

/// The registry service owning both collections through its storage handle
///
/// Constructed once at process start and handed to the transport layer by
/// reference; tests construct their own instance over a fresh store.
#[derive(Debug)]
pub struct RegistryService<R> {
    registry: R,
}

impl<R> RegistryService<R>
where
    R: StudentDirectory + GroupStore,
{
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// All students, in seed order
    pub async fn list_students(&self) -> DomainResult<Vec<Student>> {
        self.registry.list_students().await
    }

    /// All groups, in insertion order
    pub async fn list_groups(&self) -> DomainResult<Vec<GroupSummary>> {
        self.registry.list_groups().await
    }

    /// Create a group from member names
    ///
    /// Every name must resolve to a student before anything is stored; one
    /// unresolved name fails the whole request and no partial group is
    /// created. Member ids keep the order of the input names.
    pub async fn create_group(&self, request: CreateGroupRequest) -> DomainResult<GroupSummary> {
        let mut members = Vec::with_capacity(request.members.len());
        for name in &request.members {
            match self.registry.find_student_by_name(name).await? {
                Some(student) => members.push(student.id()),
                None => return Err(DomainError::unknown_member(name)),
            }
        }

        let group = self.registry.insert_group(request.group_name, members).await?;
        info!(group = %group.id(), name = group.group_name(), "group created");
        Ok(group)
    }

    /// Remove every group with the given id
    ///
    /// Idempotent: removing an id that matches nothing succeeds and changes
    /// nothing.
    pub async fn delete_group(&self, id: GroupId) -> DomainResult<()> {
        let removed = self.registry.remove_group(id).await?;
        debug!(group = %id, removed, "group delete processed");
        Ok(())
    }

    /// Resolve a group to its detail view
    ///
    /// Member ids with no matching student are dropped from the output, not
    /// reported as an error.
    pub async fn group_detail(&self, id: GroupId) -> DomainResult<GroupDetail> {
        let group = self
            .registry
            .find_group(id)
            .await?
            .ok_or(DomainError::GroupNotFound { id })?;

        let mut members = Vec::with_capacity(group.members().len());
        for &member_id in group.members() {
            if let Some(student) = self.registry.find_student(member_id).await? {
                members.push(student);
            }
        }

        Ok(GroupDetail::new(group.id(), group.group_name(), members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::value_objects::StudentId,
        infrastructure::adapters::InMemoryRegistry,
    };

    fn seeded_service() -> RegistryService<InMemoryRegistry> {
        RegistryService::new(InMemoryRegistry::with_seed_data())
    }

    fn request(group_name: &str, members: &[&str]) -> CreateGroupRequest {
        CreateGroupRequest {
            group_name: group_name.to_owned(),
            members: members.iter().map(|m| (*m).to_owned()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_group_resolves_names_in_order() {
        let service = seeded_service();

        let group = service.create_group(request("Group 3", &["Eve", "Alice"])).await.unwrap();

        assert_eq!(group.id(), GroupId::new(3));
        assert_eq!(group.group_name(), "Group 3");
        assert_eq!(group.members(), &[StudentId::new(5), StudentId::new(1)]);

        let groups = service.list_groups().await.unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2], group);
    }

    #[tokio::test]
    async fn test_create_group_rejects_unknown_member_without_partial_insert() {
        let service = seeded_service();

        let err = service
            .create_group(request("BadGroup", &["Alice", "Zed"]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownMember { name } if name == "Zed"));

        // No partial group was stored
        assert_eq!(service.list_groups().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_group_accepts_empty_member_list() {
        let service = seeded_service();

        let group = service.create_group(request("Loners", &[])).await.unwrap();
        assert!(group.members().is_empty());
    }

    #[tokio::test]
    async fn test_create_group_keeps_duplicate_members() {
        let service = seeded_service();

        let group = service
            .create_group(request("Doubles", &["Bob", "Bob"]))
            .await
            .unwrap();
        assert_eq!(group.members(), &[StudentId::new(2), StudentId::new(2)]);
    }

    #[tokio::test]
    async fn test_delete_group_is_idempotent() {
        let service = seeded_service();

        service.delete_group(GroupId::new(1)).await.unwrap();
        assert_eq!(service.list_groups().await.unwrap().len(), 1);

        // Absent id still succeeds and changes nothing
        service.delete_group(GroupId::new(999)).await.unwrap();
        assert_eq!(service.list_groups().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_group_detail_resolves_members() {
        let service = seeded_service();

        let detail = service.group_detail(GroupId::new(1)).await.unwrap();
        assert_eq!(detail.group_name(), "Group 1");

        let names: Vec<_> = detail.members().iter().map(Student::name).collect();
        assert_eq!(names, vec!["Alice", "Bob", "David"]);
    }

    #[tokio::test]
    async fn test_group_detail_missing_group() {
        let service = seeded_service();

        let err = service.group_detail(GroupId::new(999)).await.unwrap_err();
        assert!(matches!(err, DomainError::GroupNotFound { id } if id == GroupId::new(999)));
    }

    #[tokio::test]
    async fn test_group_detail_drops_dangling_member_ids() {
        let registry = InMemoryRegistry::with_seed_data();
        registry
            .insert_group(
                "Ghosts".to_owned(),
                vec![StudentId::new(1), StudentId::new(99)],
            )
            .await
            .unwrap();

        let service = RegistryService::new(registry);
        let detail = service.group_detail(GroupId::new(3)).await.unwrap();

        // The dangling id 99 is silently dropped
        let names: Vec<_> = detail.members().iter().map(Student::name).collect();
        assert_eq!(names, vec!["Alice"]);
    }
}
