//! Group request DTOs
//!
//! Explicit request schemas validated at the transport boundary before any
//! registry operation runs, keeping body parsing out of the core logic.

use serde::Deserialize;

/// Request to create a new group
///
/// `members` carries student *names*; the registry resolves them to ids.
/// An empty member list is accepted, and duplicate names are allowed (they
/// produce duplicate member ids).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub group_name: String,
    pub members: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_camel_case_body() {
        let request: CreateGroupRequest =
            serde_json::from_str(r#"{"groupName": "Group 3", "members": ["Alice", "Eve"]}"#)
                .unwrap();

        assert_eq!(request.group_name, "Group 3");
        assert_eq!(request.members, vec!["Alice", "Eve"]);
    }

    #[test]
    fn test_request_rejects_missing_fields() {
        let result = serde_json::from_str::<CreateGroupRequest>(r#"{"groupName": "Group 3"}"#);
        assert!(result.is_err());
    }
}
