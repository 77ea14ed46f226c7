//! Posts from the versioned `/rest/posts` API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AuthorId, LifecycleState, Visibility};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub author: AuthorId,
    #[serde(default)]
    pub commentary: String,
    pub visibility: Visibility,
    pub distribution: Distribution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PostContent>,
    pub lifecycle_state: LifecycleState,
    #[serde(default)]
    pub is_reshare_disabled_by_author: bool,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// A published post with the main feed distribution.
    #[must_use]
    pub fn new(author: AuthorId, commentary: &str) -> Self {
        Self {
            id: None,
            author,
            commentary: commentary.to_owned(),
            visibility: Visibility::Public,
            distribution: Distribution::default(),
            content: None,
            lifecycle_state: LifecycleState::Published,
            is_reshare_disabled_by_author: false,
            created_at: None,
            last_modified_at: None,
            published_at: None,
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub feed_distribution: FeedDistribution,
    #[serde(default)]
    pub target_entities: Vec<serde_json::Value>,
    #[serde(default)]
    pub third_party_distribution_channels: Vec<String>,
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            feed_distribution: FeedDistribution::MainFeed,
            target_entities: Vec::new(),
            third_party_distribution_channels: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedDistribution {
    MainFeed,
    None,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleContent>,
}

/// Reference to an uploaded image or video.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaContent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleContent {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_post_from_api() {
        let json = r#"{
            "id": "urn:li:share:6844785523593134080",
            "author": "urn:li:organization:5515715",
            "commentary": "Sample text Post",
            "visibility": "PUBLIC",
            "distribution": {
                "feedDistribution": "MAIN_FEED",
                "targetEntities": [],
                "thirdPartyDistributionChannels": []
            },
            "lifecycleState": "PUBLISHED",
            "isReshareDisabledByAuthor": false,
            "createdAt": 1631733948573,
            "publishedAt": 1631733948573
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.author.to_string(), "urn:li:organization:5515715");
        assert_eq!(post.commentary, "Sample text Post");
        assert_eq!(post.distribution.feed_distribution, FeedDistribution::MainFeed);
        assert_eq!(
            post.created_at.map(|created| created.timestamp_millis()),
            Some(1631733948573)
        );
        assert!(post.last_modified_at.is_none());
    }

    #[test]
    fn test_new_post_omits_server_fields() {
        let author = crate::PersonId::from_id("abc").unwrap().into();
        let post = Post::new(author, "hi").with_content(PostContent {
            media: Some(MediaContent {
                id: "urn:li:image:C4E".to_owned(),
                title: None,
                alt_text: Some("a chart".to_owned()),
            }),
            article: None,
        });
        let json = serde_json::to_value(&post).unwrap();

        assert!(json.get("id").is_none());
        assert!(json.get("createdAt").is_none());
        assert_eq!(json["content"]["media"]["altText"], "a chart");
        assert_eq!(json["lifecycleState"], "PUBLISHED");
    }
}
