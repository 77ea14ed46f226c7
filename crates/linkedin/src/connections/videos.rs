use crate::{
    clients::{convert_result, BaseClient},
    http::Query,
    model::{
        ActionResponse, AuthorId, FinalizeVideoUpload, Id, InitializeVideoUpload, Video,
        VideoId, VideoUpload,
    },
    util, ClientResult,
};

use libs::serde_json::{self, json};
use maybe_async::maybe_async;

/// Videos from the versioned `/rest/videos` API.
///
/// A video is uploaded in parts: after initializing, every
/// [`UploadInstruction`](crate::model::UploadInstruction) gets its byte range
/// `PUT`, and the `ETag`s of those uploads finalize it.
///
/// [Reference](https://learn.microsoft.com/en-us/linkedin/marketing/community-management/shares/videos-api)
#[maybe_async]
pub trait VideoConnection: BaseClient {
    async fn initialize_video_upload(
        &self,
        owner: &AuthorId,
        file_size_bytes: u64,
    ) -> ClientResult<VideoUpload> {
        let url = util::with_query(&self.rest_url("videos"), [("action", "initializeUpload")])?;
        let request = serde_json::to_value(InitializeVideoUpload {
            owner: owner.clone(),
            file_size_bytes,
            upload_captions: false,
            upload_thumbnail: false,
        })?;
        let body = json!({ "initializeUploadRequest": request });

        let response = self.api_post(&url, &body).await?;
        convert_result::<ActionResponse<VideoUpload>>(&response.body).map(|action| action.value)
    }

    async fn finalize_video_upload(&self, finalize: &FinalizeVideoUpload) -> ClientResult<()> {
        let url = util::with_query(&self.rest_url("videos"), [("action", "finalizeUpload")])?;
        let request = serde_json::to_value(finalize)?;
        let body = json!({ "finalizeUploadRequest": request });

        self.api_post(&url, &body).await?;
        Ok(())
    }

    async fn video(&self, id: &VideoId) -> ClientResult<Video> {
        let url = self.rest_url(&format!("videos/{}", util::encode_urn(&id.urn())));
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }
}

impl<C: BaseClient> VideoConnection for C {}
