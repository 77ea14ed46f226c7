use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Position of a page inside a collection, as reported by LinkedIn. Legacy
/// (v1) responses carry it as top level `_start`, `_count` and `_total`
/// fields, newer ones as a `paging` object.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paging {
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub links: Vec<PagingLink>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagingLink {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// One page of a collection together with the URLs of its neighbours.
/// `previous` and `next` can be handed back to the client to fetch them.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub elements: Vec<T>,
    pub paging: Option<Paging>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            paging: None,
            previous: None,
            next: None,
        }
    }
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Total number of entries in the collection, when LinkedIn reports it.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.paging.as_ref().and_then(|paging| paging.total)
    }
}

/// Answer of a Rest.li batch get (`?ids=List(...)`), keyed by the requested
/// URN. Entities that could not be fetched are reported in `errors` instead.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BatchResponse<T> {
    pub results: HashMap<String, T>,
    #[serde(default)]
    pub statuses: HashMap<String, u16>,
    #[serde(default)]
    pub errors: HashMap<String, serde_json::Value>,
}
