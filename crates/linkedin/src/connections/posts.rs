use crate::{
    clients::{convert_result, created_id, BaseClient},
    http::Query,
    model::{AuthorId, Id, Page, Post},
    paging::Paginator,
    util, ClientResult,
};

use libs::serde_json::{self, json};
use maybe_async::maybe_async;

/// Posts from the versioned `/rest` API, which need the `LinkedIn-Version`
/// header.
///
/// [Reference](https://learn.microsoft.com/en-us/linkedin/marketing/community-management/shares/posts-api)
#[maybe_async]
pub trait PostConnection: BaseClient {
    /// Publishes `post` and returns the URN LinkedIn assigned to it.
    async fn create_post(&self, post: &Post) -> ClientResult<String> {
        let body = serde_json::to_value(post)?;
        let response = self.api_post(&self.rest_url("posts"), &body).await?;
        created_id(&response)
    }

    /// `urn` may be either a share or an ugcPost URN.
    async fn post(&self, urn: &str) -> ClientResult<Post> {
        let url = self.rest_url(&format!("posts/{}", util::encode_urn(urn)));
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn posts_by_author(
        &self,
        author: &AuthorId,
        start: u32,
        count: u32,
    ) -> ClientResult<Page<Post>> {
        let url = posts_by_author_url(self, author, start, count)?;
        self.get_page(&url).await
    }

    /// Every post of `author`, fetched `count` at a time.
    fn all_posts_by_author<'a>(
        &'a self,
        author: &AuthorId,
        count: u32,
    ) -> ClientResult<Paginator<'a, ClientResult<Post>>> {
        let url = posts_by_author_url(self, author, 0, count)?;
        Ok(self.paginate(url))
    }

    async fn delete_post(&self, urn: &str) -> ClientResult<()> {
        let url = self.rest_url(&format!("posts/{}", util::encode_urn(urn)));
        self.api_delete(&url, &json!({})).await?;
        Ok(())
    }
}

impl<C: BaseClient> PostConnection for C {}

fn posts_by_author_url<C: BaseClient>(
    client: &C,
    author: &AuthorId,
    start: u32,
    count: u32,
) -> ClientResult<String> {
    let author = author.urn();
    let start = start.to_string();
    let count = count.to_string();
    let url = util::with_query(
        &client.rest_url("posts"),
        [
            ("q", "author"),
            ("author", author.as_str()),
            ("start", start.as_str()),
            ("count", count.as_str()),
        ],
    )?;
    Ok(url)
}
