//! `_start` / `_count` / `_total` paging of the legacy collections.

use super::strategy::{build_next_url, build_previous_url, read_index};
use super::{Discovery, PageLinks, PagingResult, PagingStrategy};
use crate::model::Paging;

use libs::serde_json::Value;

/// Entry key of legacy collections.
pub(super) const DATA_KEY: &str = "values";

const START: &str = "_start";
const COUNT: &str = "_count";
const TOTAL: &str = "_total";

pub(super) fn discover(
    strategy: &PagingStrategy,
    response: &Value,
    endpoint: &str,
) -> PagingResult<Discovery> {
    let count = read_index(response, COUNT, COUNT)?;
    let start = read_index(response, START, START)?;
    let total = read_index(response, TOTAL, TOTAL)?;

    let (Some(count), Some(start), Some(total)) = (count, start, total) else {
        return Ok(Discovery::Unpaged);
    };

    // A stale total is caught by the empty page check.
    let exhausted =
        count == 0 || start.saturating_add(count) >= total || strategy.entry_count(response)? == 0;

    let next = if exhausted {
        None
    } else {
        Some(build_next_url(endpoint, start, count)?)
    };
    let previous = build_previous_url(endpoint, start, count)?;

    Ok(Discovery::Paged(PageLinks { previous, next }))
}

pub(super) fn paging(response: &Value) -> Option<Paging> {
    let index = |key: &str| response.get(key).and_then(Value::as_u64);
    let (start, count, total) = (index(START), index(COUNT), index(TOTAL));

    if start.is_none() && count.is_none() && total.is_none() {
        return None;
    }

    Some(Paging {
        start,
        count,
        total,
        links: Vec::new(),
    })
}
