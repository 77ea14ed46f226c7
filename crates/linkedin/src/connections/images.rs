use crate::{
    clients::{convert_result, BaseClient},
    http::Query,
    model::{
        ActionResponse, AuthorId, BatchResponse, Id, Image, ImageId, ImageUpload,
        InitializeImageUpload,
    },
    util, ClientResult,
};

use std::collections::HashMap;

use libs::serde_json::{self, json};
use maybe_async::maybe_async;

/// Images from the versioned `/rest/images` API. Uploading happens in two
/// steps: the upload is initialized here, then the bytes are `PUT` to the
/// returned `upload_url`.
///
/// [Reference](https://learn.microsoft.com/en-us/linkedin/marketing/community-management/shares/images-api)
#[maybe_async]
pub trait ImageConnection: BaseClient {
    async fn initialize_image_upload(&self, owner: &AuthorId) -> ClientResult<ImageUpload> {
        let url = util::with_query(&self.rest_url("images"), [("action", "initializeUpload")])?;
        let request = serde_json::to_value(InitializeImageUpload {
            owner: owner.clone(),
        })?;
        let body = json!({ "initializeUploadRequest": request });

        let response = self.api_post(&url, &body).await?;
        convert_result::<ActionResponse<ImageUpload>>(&response.body).map(|action| action.value)
    }

    async fn image(&self, id: &ImageId) -> ClientResult<Image> {
        let url = self.rest_url(&format!("images/{}", util::encode_urn(&id.urn())));
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    /// Batch get, keyed by image URN. Images that failed are left out.
    async fn images(&self, ids: &[ImageId]) -> ClientResult<HashMap<String, Image>> {
        let urns = ids.iter().map(Id::urn).collect::<Vec<_>>();
        let list = util::restli_list(urns.iter().map(String::as_str));
        let url = util::replace_or_add_query_parameter(&self.rest_url("images"), "ids", &list)?;

        let result = self.api_get(&url, &Query::new()).await?;
        convert_result::<BatchResponse<Image>>(&result).map(|batch| batch.results)
    }
}

impl<C: BaseClient> ImageConnection for C {}
