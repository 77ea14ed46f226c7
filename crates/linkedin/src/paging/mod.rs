//! Page discovery for LinkedIn collections.
//!
//! A collection response describes which slice of the result set it holds.
//! [`PagingStrategy`] reads that description for one response and derives
//! the URLs of the previous and next pages from the URL the response was
//! fetched with. Two conventions exist, picked through [`ApiVersion`]:
//!
//! * [`ApiVersion::V1`]: top level `_start`, `_count` and `_total`. The last
//!   page is known from the total.
//! * [`ApiVersion::V2`]: a `paging` object with `start` and `count`. There is
//!   no reliable total, so a page shorter than `count` is the last one.
//!
//! The helpers [`paginate`] follow the `next` links until the collection is
//! exhausted, as a stream in async builds and as an iterator in sync ones.

mod legacy;
mod strategy;
mod versioned;

#[cfg(feature = "__sync")]
mod iter;
#[cfg(not(feature = "__sync"))]
mod stream;

pub use strategy::{Discovery, PageLinks, PagingStrategy};

#[cfg(feature = "__sync")]
pub use iter::{paginate, Paginator};
#[cfg(not(feature = "__sync"))]
pub use stream::{paginate, Paginator};

use crate::{model::Page, ApiVersion};

use libs::serde_json::{self, Value};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Query parameter holding the index of the first entry of a page.
pub const START_PARAM: &str = "start";
/// Query parameter holding the page size.
pub const COUNT_PARAM: &str = "count";

pub type PagingResult<T> = Result<T, PagingError>;

#[derive(Debug, Error)]
pub enum PagingError {
    /// The strategy was used without the URL the response came from.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// A paging field exists but has the wrong JSON type.
    #[error("malformed paging field `{field}`: expected {expected}, got {found}")]
    MalformedField {
        field: &'static str,
        expected: &'static str,
        found: Value,
    },

    #[error("invalid endpoint: {0}")]
    InvalidUrl(#[from] libs::url::ParseError),
}

/// Splits a collection response into its entries and its paging links.
///
/// `body` is the parsed response and `endpoint` the full URL it was fetched
/// with. Entries are read from the data key of `version`, or from the legacy
/// `values` key when that one is absent.
pub fn into_page<T: DeserializeOwned>(
    version: ApiVersion,
    mut body: Value,
    endpoint: &str,
) -> crate::ClientResult<Page<T>> {
    let strategy = version.paging_strategy();
    let links = strategy.discover(Some(&body), endpoint)?.into_links();
    let paging = strategy.paging(&body);

    let elements = match body.as_object_mut().and_then(|object| {
        object
            .remove(strategy.data_key())
            .or_else(|| object.remove(legacy::DATA_KEY))
    }) {
        Some(entries) => serde_json::from_value(entries)?,
        None => Vec::new(),
    };

    Ok(Page {
        elements,
        paging,
        previous: links.previous,
        next: links.next,
    })
}
