use serde::{Deserialize, Serialize};

use crate::TimeRange;

/// Element of `/organizationalEntityShareStatistics`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareStatisticsElement {
    pub organizational_entity: String,
    #[serde(default)]
    pub share: Option<String>,
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    pub total_share_statistics: ShareStatistics,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareStatistics {
    pub click_count: u64,
    pub comment_count: u64,
    pub engagement: f64,
    pub impression_count: u64,
    pub like_count: u64,
    pub share_count: u64,
    pub unique_impressions_count: u64,
}

/// Element of `/organizationalEntityFollowerStatistics`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FollowerStatisticsElement {
    pub organizational_entity: String,
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    #[serde(default)]
    pub follower_gains: Option<FollowerGains>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FollowerGains {
    pub organic_follower_gain: i64,
    pub paid_follower_gain: i64,
}
