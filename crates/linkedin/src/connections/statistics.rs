use crate::{
    clients::BaseClient,
    model::{
        FollowerStatisticsElement, Id, OrganizationId, Page, ShareStatisticsElement, TimeRange,
    },
    util, ClientResult,
};

use libs::url::ParseError;
use maybe_async::maybe_async;

/// Organization statistics from the legacy `/v2` API. Without a time range
/// the lifetime totals are returned, otherwise one element per day.
///
/// [Reference](https://learn.microsoft.com/en-us/linkedin/marketing/community-management/organizations/share-statistics)
#[maybe_async]
pub trait StatisticsConnection: BaseClient {
    async fn share_statistics(
        &self,
        organization: &OrganizationId,
        time_range: Option<TimeRange>,
    ) -> ClientResult<Page<ShareStatisticsElement>> {
        let url = statistics_url(
            &self.api_url("organizationalEntityShareStatistics"),
            organization,
            time_range,
        )?;
        self.get_page(&url).await
    }

    async fn follower_statistics(
        &self,
        organization: &OrganizationId,
        time_range: Option<TimeRange>,
    ) -> ClientResult<Page<FollowerStatisticsElement>> {
        let url = statistics_url(
            &self.api_url("organizationalEntityFollowerStatistics"),
            organization,
            time_range,
        )?;
        self.get_page(&url).await
    }
}

impl<C: BaseClient> StatisticsConnection for C {}

fn statistics_url(
    base: &str,
    organization: &OrganizationId,
    time_range: Option<TimeRange>,
) -> Result<String, ParseError> {
    let urn = organization.urn();
    let url = util::with_query(
        base,
        [("q", "organizationalEntity"), ("organizationalEntity", urn.as_str())],
    )?;

    match time_range {
        Some(range) => {
            let start = range.start.to_string();
            let end = range.end.to_string();
            util::with_query(
                &url,
                [
                    ("timeIntervals.timeGranularityType", "DAY"),
                    ("timeIntervals.timeRange.start", start.as_str()),
                    ("timeIntervals.timeRange.end", end.as_str()),
                ],
            )
        }
        None => Ok(url),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_statistics_url_with_time_range() {
        let organization = OrganizationId::from_id("2414183").unwrap();
        let range = TimeRange {
            start: 1451606400000,
            end: 1451952000000,
        };

        let url = statistics_url("https://api.linkedin.com/v2/x", &organization, Some(range)).unwrap();
        assert_eq!(
            url,
            "https://api.linkedin.com/v2/x?q=organizationalEntity\
             &organizationalEntity=urn%3Ali%3Aorganization%3A2414183\
             &timeIntervals.timeGranularityType=DAY\
             &timeIntervals.timeRange.start=1451606400000\
             &timeIntervals.timeRange.end=1451952000000"
        );
    }

    #[test]
    fn test_statistics_url_lifetime() {
        let organization = OrganizationId::from_id("2414183").unwrap();
        let url = statistics_url("https://api.linkedin.com/v2/x", &organization, None).unwrap();
        assert!(!url.contains("timeIntervals"));
    }
}
