//! Image and video assets (`/rest/images`, `/rest/videos`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AuthorId;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    WaitingUpload,
    Processing,
    ProcessingFailed,
    Available,
}

/// Body of `POST /rest/images?action=initializeUpload`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InitializeImageUpload {
    pub owner: AuthorId,
}

/// Body of `POST /rest/videos?action=initializeUpload`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InitializeVideoUpload {
    pub owner: AuthorId,
    pub file_size_bytes: u64,
    pub upload_captions: bool,
    pub upload_thumbnail: bool,
}

/// Body of `POST /rest/videos?action=finalizeUpload`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeVideoUpload {
    pub video: String,
    pub upload_token: String,
    pub uploaded_part_ids: Vec<String>,
}

/// LinkedIn wraps action responses in a `value` object.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ActionResponse<T> {
    pub value: T,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub upload_url_expires_at: DateTime<Utc>,
    pub upload_url: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoUpload {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub upload_url_expires_at: DateTime<Utc>,
    pub video: String,
    pub upload_instructions: Vec<UploadInstruction>,
    #[serde(default)]
    pub upload_token: String,
    #[serde(default)]
    pub caption_upload_url: Option<String>,
    #[serde(default)]
    pub thumbnail_upload_url: Option<String>,
}

/// One byte range of a (possibly multipart) video upload.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadInstruction {
    pub upload_url: String,
    pub first_byte: u64,
    pub last_byte: u64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub status: MediaStatus,
    #[serde(default)]
    pub owner: Option<AuthorId>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub download_url_expires_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub status: MediaStatus,
    #[serde(default)]
    pub owner: Option<AuthorId>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub download_url_expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub aspect_ratio_width: Option<f64>,
    #[serde(default)]
    pub aspect_ratio_height: Option<f64>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_video_upload_response() {
        let json = r#"{
            "value": {
                "uploadUrlsExpireAt": 1,
                "uploadUrlExpiresAt": 1650567510704,
                "video": "urn:li:video:C5F10AQGKQg_6y2a4sQ",
                "uploadInstructions": [
                    {"uploadUrl": "https://www.linkedin.com/dms-uploads/1", "lastByte": 4194303, "firstByte": 0},
                    {"uploadUrl": "https://www.linkedin.com/dms-uploads/2", "lastByte": 8388607, "firstByte": 4194304}
                ],
                "uploadToken": ""
            }
        }"#;
        let upload: ActionResponse<VideoUpload> = serde_json::from_str(json).unwrap();

        assert_eq!(upload.value.video, "urn:li:video:C5F10AQGKQg_6y2a4sQ");
        assert_eq!(upload.value.upload_instructions.len(), 2);
        assert_eq!(upload.value.upload_instructions[1].first_byte, 4194304);
        assert!(upload.value.thumbnail_upload_url.is_none());
    }

    #[test]
    fn test_finalize_body() {
        let body = FinalizeVideoUpload {
            video: "urn:li:video:C5F".to_owned(),
            upload_token: String::new(),
            uploaded_part_ids: vec!["etag".to_owned()],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["uploadedPartIds"][0], "etag");
        assert_eq!(json["uploadToken"], "");
    }
}
