use serde::{Deserialize, Serialize};

/// Member profile returned by the OpenID Connect `/v2/userinfo` endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    /// Member identifier, usable as the id part of a person URN.
    pub sub: String,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub picture: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub locale: Option<serde_json::Value>,
}
