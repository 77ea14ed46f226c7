use crate::{
    clients::{convert_result, BaseClient},
    http::Query,
    model::{Id, NetworkSize, Organization, OrganizationAcl, OrganizationId, Page},
    query, util, ClientResult,
};

use maybe_async::maybe_async;

/// Organization lookups, from the legacy `/v2` API.
#[maybe_async]
pub trait OrganizationConnection: BaseClient {
    /// [Reference](https://learn.microsoft.com/en-us/linkedin/marketing/community-management/organizations/organization-lookup-api)
    async fn organization(&self, id: &OrganizationId) -> ClientResult<Organization> {
        let url = self.api_url(&format!("organizations/{}", id.id()));
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    /// Finds the organization behind a vanity name, the last segment of its
    /// public page URL.
    async fn organization_by_vanity_name(
        &self,
        vanity_name: &str,
    ) -> ClientResult<Page<Organization>> {
        let url = util::with_query(
            &self.api_url("organizations"),
            [("q", "vanityName"), ("vanityName", vanity_name)],
        )?;
        self.get_page(&url).await
    }

    /// The organizations the authenticated member is an approved
    /// administrator of.
    async fn administered_organizations(
        &self,
        start: u32,
        count: u32,
    ) -> ClientResult<Page<OrganizationAcl>> {
        let start = start.to_string();
        let count = count.to_string();
        let url = util::with_query(
            &self.api_url("organizationAcls"),
            [
                ("q", "roleAssignee"),
                ("role", "ADMINISTRATOR"),
                ("state", "APPROVED"),
                ("start", start.as_str()),
                ("count", count.as_str()),
            ],
        )?;
        self.get_page(&url).await
    }

    /// Number of members following the organization.
    async fn follower_count(&self, id: &OrganizationId) -> ClientResult<u64> {
        let url = self.api_url(&format!("networkSizes/{}", util::encode_urn(&id.urn())));
        let params = query! {
            "edgeType": "CompanyFollowedByMember"
        };
        let result = self.api_get(&url, &params).await?;
        convert_result::<NetworkSize>(&result).map(|size| size.first_degree_size)
    }
}

impl<C: BaseClient> OrganizationConnection for C {}
