use super::{legacy, versioned, PagingError, PagingResult, COUNT_PARAM, START_PARAM};
use crate::{model::Paging, util::replace_or_add_query_parameter, ApiVersion};

use std::borrow::Cow;

use libs::serde_json::Value;

/// URLs of the pages around the one just fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// What a response said about its position in the collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Discovery {
    /// No paging metadata: the response is the whole collection.
    Unpaged,
    /// A `paging` object without both `start` and `count`. Nothing can be
    /// derived from it and links computed earlier are left alone.
    Undetermined,
    /// Paging metadata was read. `next` is `None` on the last page.
    Paged(PageLinks),
}

impl Discovery {
    /// Whether this is the last page of a paged collection.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Paged(PageLinks { next: None, .. }))
    }

    #[must_use]
    pub fn into_links(self) -> PageLinks {
        match self {
            Self::Paged(links) => links,
            Self::Unpaged | Self::Undetermined => PageLinks::default(),
        }
    }
}

/// Finds the previous and next pages of one collection response.
///
/// A strategy is meant for a single response: create it with
/// [`ApiVersion::paging_strategy`], call [`populate_pages`] and read the
/// links.
///
/// ```
/// use linkedin::ApiVersion;
/// use libs::serde_json::json;
///
/// let response = json!({"_start": 5, "_count": 5, "_total": 20, "values": [1, 2, 3, 4, 5]});
/// let mut strategy = ApiVersion::V1.paging_strategy();
/// strategy.populate_pages(Some(&response), "https://test.com/test").unwrap();
///
/// assert_eq!(strategy.next_page(), Some("https://test.com/test?start=10&count=5"));
/// assert_eq!(strategy.previous_page(), Some("https://test.com/test?start=0&count=5"));
/// ```
///
/// [`populate_pages`]: PagingStrategy::populate_pages
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagingStrategy {
    version: ApiVersion,
    data_key: Cow<'static, str>,
    links: PageLinks,
}

impl PagingStrategy {
    #[must_use]
    pub fn new(version: ApiVersion) -> Self {
        Self {
            version,
            data_key: Cow::Borrowed(version.data_key()),
            links: PageLinks::default(),
        }
    }

    /// Reads the entries from `data_key` instead of the version's default.
    #[must_use]
    pub fn with_data_key(mut self, data_key: impl Into<Cow<'static, str>>) -> Self {
        self.data_key = data_key.into();
        self
    }

    #[must_use]
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// Key of the response object holding the entries.
    #[must_use]
    pub fn data_key(&self) -> &str {
        &self.data_key
    }

    #[must_use]
    pub fn previous_page(&self) -> Option<&str> {
        self.links.previous.as_deref()
    }

    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.links.next.as_deref()
    }

    #[must_use]
    pub fn links(&self) -> &PageLinks {
        &self.links
    }

    /// Computes the links for `json_response`, fetched from `full_endpoint`,
    /// and stores them in the strategy.
    ///
    /// A blank endpoint is always an error, even without a response. A
    /// missing response clears both links.
    pub fn populate_pages(
        &mut self,
        json_response: Option<&Value>,
        full_endpoint: &str,
    ) -> PagingResult<()> {
        match self.discover(json_response, full_endpoint)? {
            Discovery::Undetermined => {}
            discovery => self.links = discovery.into_links(),
        }
        Ok(())
    }

    /// Same computation as [`populate_pages`](Self::populate_pages), without
    /// storing anything, telling which case the response fell into.
    pub fn discover(
        &self,
        json_response: Option<&Value>,
        full_endpoint: &str,
    ) -> PagingResult<Discovery> {
        if full_endpoint.trim().is_empty() {
            return Err(PagingError::InvalidState(
                "the full endpoint of the response is required to find its pages",
            ));
        }

        let Some(response) = json_response else {
            return Ok(Discovery::Unpaged);
        };

        match self.version {
            ApiVersion::V1 => legacy::discover(self, response, full_endpoint),
            ApiVersion::V2 => versioned::discover(self, response, full_endpoint),
        }
    }

    /// The paging metadata of `response` in a version independent shape.
    #[must_use]
    pub fn paging(&self, response: &Value) -> Option<Paging> {
        match self.version {
            ApiVersion::V1 => legacy::paging(response),
            ApiVersion::V2 => versioned::paging(response),
        }
    }

    /// Number of entries in `response`, read from the data key or, failing
    /// that, from the legacy `values` key.
    pub(super) fn entry_count(&self, response: &Value) -> PagingResult<u64> {
        let entries = response
            .get(self.data_key())
            .or_else(|| response.get(legacy::DATA_KEY))
            .filter(|entries| !entries.is_null());

        match entries {
            None => Ok(0),
            Some(Value::Array(entries)) => Ok(entries.len() as u64),
            Some(other) => Err(PagingError::MalformedField {
                field: "entries",
                expected: "an array",
                found: other.clone(),
            }),
        }
    }
}

/// Reads an optional unsigned integer field. `null` counts as missing.
pub(super) fn read_index(
    object: &Value,
    key: &str,
    field: &'static str,
) -> PagingResult<Option<u64>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| PagingError::MalformedField {
                field,
                expected: "an unsigned integer",
                found: value.clone(),
            }),
    }
}

/// The page after the one at `start`: `start + count`, same size.
pub(super) fn build_next_url(endpoint: &str, start: u64, count: u64) -> PagingResult<String> {
    let next_start = start.saturating_add(count);
    let url = replace_or_add_query_parameter(endpoint, START_PARAM, &next_start.to_string())?;
    Ok(replace_or_add_query_parameter(
        &url,
        COUNT_PARAM,
        &count.to_string(),
    )?)
}

/// The page before the one at `start`, if any. It never starts below zero.
pub(super) fn build_previous_url(
    endpoint: &str,
    start: u64,
    count: u64,
) -> PagingResult<Option<String>> {
    if start == 0 {
        return Ok(None);
    }

    let previous_start = start.saturating_sub(count);
    let url = replace_or_add_query_parameter(endpoint, START_PARAM, &previous_start.to_string())?;
    let url = replace_or_add_query_parameter(&url, COUNT_PARAM, &count.to_string())?;
    Ok(Some(url))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_next_url_replaces_existing_parameters() {
        let url = build_next_url("https://test.com/test?start=5&count=5", 5, 5).unwrap();
        assert_eq!(url, "https://test.com/test?start=10&count=5");

        let again = build_next_url(&url, 5, 5).unwrap();
        assert_eq!(again, url);
    }

    #[test]
    fn test_previous_url_is_clamped() {
        let url = build_previous_url("https://test.com/test", 3, 5).unwrap();
        assert_eq!(url.as_deref(), Some("https://test.com/test?start=0&count=5"));

        assert_eq!(build_previous_url("https://test.com/test", 0, 5).unwrap(), None);
    }

    #[test]
    fn test_read_index() {
        let object = libs::serde_json::json!({"a": 3, "b": null, "c": "3", "d": -1});
        assert_eq!(read_index(&object, "a", "a").unwrap(), Some(3));
        assert_eq!(read_index(&object, "b", "b").unwrap(), None);
        assert_eq!(read_index(&object, "missing", "missing").unwrap(), None);
        assert!(read_index(&object, "c", "c").is_err());
        assert!(read_index(&object, "d", "d").is_err());
    }

    #[test]
    fn test_undetermined_keeps_links() {
        let mut strategy = ApiVersion::V2.paging_strategy();
        let full = libs::serde_json::json!({"paging": {"start": 0, "count": 1}, "elements": [1]});
        strategy
            .populate_pages(Some(&full), "https://test.com/test")
            .unwrap();
        assert!(strategy.next_page().is_some());

        let partial = libs::serde_json::json!({"paging": {"count": 1}});
        strategy
            .populate_pages(Some(&partial), "https://test.com/test")
            .unwrap();
        assert_eq!(
            strategy.next_page(),
            Some("https://test.com/test?start=1&count=1")
        );
    }
}
