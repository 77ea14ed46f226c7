//! All LinkedIn API endpoint response objects. Field names follow the Rust
//! conventions; the mapping to LinkedIn's camelCase keys is declared with
//! serde attributes on each type.

pub mod auth;
pub(crate) mod custom_serde;
pub mod error;
pub mod idtypes;
pub mod media;
pub mod organization;
pub mod page;
pub mod post;
pub mod share;
pub mod statistics;
pub mod userinfo;

pub use {
    auth::*, error::*, idtypes::*, media::*, organization::*, page::*, post::*, share::*,
    statistics::*, userinfo::*,
};

use serde::{Deserialize, Serialize};

/// Publishing state shared by shares and posts.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Draft,
    #[default]
    Published,
    PublishRequested,
    PublishFailed,
    Processing,
    ProcessingFailed,
}

/// Who is able to see a share or post.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Connections,
    #[default]
    Public,
    LoggedIn,
    Container,
}

/// Inclusive time window in epoch milliseconds, as used by the statistics
/// finders.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}
