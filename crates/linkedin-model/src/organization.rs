//! Organizations and the member roles on them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: i64,
    pub localized_name: String,
    #[serde(default)]
    pub vanity_name: Option<String>,
    #[serde(default)]
    pub localized_website: Option<String>,
    #[serde(default)]
    pub localized_description: Option<String>,
    #[serde(default)]
    pub primary_organization_type: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganizationRole {
    Administrator,
    DirectSponsoredContentPoster,
    RecruitingPoster,
    LeadGenFormsManager,
    Analyst,
    CuratorRole,
    ContentAdministrator,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleState {
    Approved,
    Requested,
    Rejected,
    Revoked,
}

/// Access control entry returned by `/organizationAcls`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationAcl {
    pub role_assignee: String,
    pub state: RoleState,
    pub role: OrganizationRole,
    #[serde(alias = "organizationalTarget")]
    pub organization: String,
}

/// Answer of `/networkSizes`, the follower count of an organization.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSize {
    pub first_degree_size: u64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_acl_accepts_both_target_names() {
        let legacy = r#"{"roleAssignee":"urn:li:person:1","state":"APPROVED","role":"ADMINISTRATOR","organization":"urn:li:organization:2"}"#;
        let versioned = r#"{"roleAssignee":"urn:li:person:1","state":"APPROVED","role":"ADMINISTRATOR","organizationalTarget":"urn:li:organization:2"}"#;

        let legacy: OrganizationAcl = serde_json::from_str(legacy).unwrap();
        let versioned: OrganizationAcl = serde_json::from_str(versioned).unwrap();
        assert_eq!(legacy, versioned);
        assert_eq!(legacy.role, OrganizationRole::Administrator);
    }
}
