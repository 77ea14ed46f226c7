use crate::{
    clients::{convert_result, created_id, BaseClient},
    http::Query,
    model::{AuthorId, Id, Page, Share},
    util, ClientResult,
};

use libs::serde_json::{self, json};
use maybe_async::maybe_async;

/// User generated content from the legacy `/v2/ugcPosts` API.
///
/// [Reference](https://learn.microsoft.com/en-us/linkedin/compliance/integrations/shares/ugc-post-api)
#[maybe_async]
pub trait ShareConnection: BaseClient {
    /// Publishes `share` and returns the URN LinkedIn assigned to it.
    async fn create_share(&self, share: &Share) -> ClientResult<String> {
        let body = serde_json::to_value(share)?;
        let response = self.api_post(&self.api_url("ugcPosts"), &body).await?;
        created_id(&response)
    }

    async fn share(&self, urn: &str) -> ClientResult<Share> {
        let url = self.api_url(&format!("ugcPosts/{}", util::encode_urn(urn)));
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn shares_by_author(
        &self,
        author: &AuthorId,
        start: u32,
        count: u32,
    ) -> ClientResult<Page<Share>> {
        let start = start.to_string();
        let count = count.to_string();
        let url = util::with_query(
            &self.api_url("ugcPosts"),
            [
                ("q", "authors"),
                ("start", start.as_str()),
                ("count", count.as_str()),
            ],
        )?;
        // The list syntax can't go through the form encoder.
        let authors = util::restli_list([author.urn().as_str()]);
        let url = util::replace_or_add_query_parameter(&url, "authors", &authors)?;
        self.get_page(&url).await
    }

    async fn delete_share(&self, urn: &str) -> ClientResult<()> {
        let url = self.api_url(&format!("ugcPosts/{}", util::encode_urn(urn)));
        self.api_delete(&url, &json!({})).await?;
        Ok(())
    }
}

impl<C: BaseClient> ShareConnection for C {}
