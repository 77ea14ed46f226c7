//! User generated content shares (`/v2/ugcPosts`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AuthorId, LifecycleState, Visibility};

/// Key under `specificContent` that holds the share payload.
pub const SHARE_CONTENT_KEY: &str = "com.linkedin.ugc.ShareContent";
/// Key under `visibility` that holds the member network visibility.
pub const MEMBER_VISIBILITY_KEY: &str = "com.linkedin.ugc.MemberNetworkVisibility";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Share {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub author: AuthorId,
    #[serde(rename = "lifecycleState")]
    pub lifecycle_state: LifecycleState,
    #[serde(rename = "specificContent")]
    pub specific_content: HashMap<String, ShareContent>,
    pub visibility: HashMap<String, Visibility>,
}

impl Share {
    /// A published text share visible to `visibility`.
    #[must_use]
    pub fn text(author: AuthorId, text: &str, visibility: Visibility) -> Self {
        let content = ShareContent {
            share_commentary: ShareCommentary {
                text: text.to_owned(),
            },
            share_media_category: ShareMediaCategory::None,
            media: None,
        };

        Self {
            id: None,
            author,
            lifecycle_state: LifecycleState::Published,
            specific_content: HashMap::from([(SHARE_CONTENT_KEY.to_owned(), content)]),
            visibility: HashMap::from([(MEMBER_VISIBILITY_KEY.to_owned(), visibility)]),
        }
    }

    /// The share payload, if present.
    #[must_use]
    pub fn content(&self) -> Option<&ShareContent> {
        self.specific_content.get(SHARE_CONTENT_KEY)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShareContent {
    #[serde(rename = "shareCommentary")]
    pub share_commentary: ShareCommentary,
    #[serde(rename = "shareMediaCategory")]
    pub share_media_category: ShareMediaCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<ShareMedia>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareCommentary {
    pub text: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareMediaCategory {
    None,
    Article,
    Image,
    Video,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareMedia {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ShareCommentary>,
    /// URN of an uploaded asset, for image and video shares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// Link, for article shares.
    #[serde(rename = "originalUrl", default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ShareCommentary>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::PersonId;

    #[test]
    fn test_text_share_wire_format() {
        let author = PersonId::from_id("8675309").unwrap().into();
        let share = Share::text(author, "Hello World!", Visibility::Public);
        let json = serde_json::to_value(&share).unwrap();

        assert_eq!(json["author"], "urn:li:person:8675309");
        assert_eq!(json["lifecycleState"], "PUBLISHED");
        assert_eq!(
            json["specificContent"][SHARE_CONTENT_KEY]["shareCommentary"]["text"],
            "Hello World!"
        );
        assert_eq!(
            json["specificContent"][SHARE_CONTENT_KEY]["shareMediaCategory"],
            "NONE"
        );
        assert_eq!(json["visibility"][MEMBER_VISIBILITY_KEY], "PUBLIC");
        assert!(json.get("id").is_none());
    }
}
