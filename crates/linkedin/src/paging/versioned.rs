//! `paging.start` / `paging.count` paging of the current collections.

use super::strategy::{build_next_url, build_previous_url, read_index};
use super::{Discovery, PageLinks, PagingError, PagingResult, PagingStrategy};
use crate::model::Paging;

use libs::serde_json::{self, Value};

const PAGING: &str = "paging";

pub(super) fn discover(
    strategy: &PagingStrategy,
    response: &Value,
    endpoint: &str,
) -> PagingResult<Discovery> {
    let paging = match response.get(PAGING) {
        None | Some(Value::Null) => return Ok(Discovery::Unpaged),
        Some(paging @ Value::Object(_)) => paging,
        Some(other) => {
            return Err(PagingError::MalformedField {
                field: PAGING,
                expected: "an object",
                found: other.clone(),
            })
        }
    };

    let count = read_index(paging, "count", "paging.count")?;
    let start = read_index(paging, "start", "paging.start")?;

    let (Some(count), Some(start)) = (count, start) else {
        return Ok(Discovery::Undetermined);
    };

    // No total here: a page shorter than requested is the last one, and
    // the last page carries no links at all.
    let returned = strategy.entry_count(response)?;
    if returned < count {
        return Ok(Discovery::Paged(PageLinks::default()));
    }

    let next = if count == 0 {
        None
    } else {
        Some(build_next_url(endpoint, start, count)?)
    };
    let previous = build_previous_url(endpoint, start, count)?;

    Ok(Discovery::Paged(PageLinks { previous, next }))
}

pub(super) fn paging(response: &Value) -> Option<Paging> {
    response
        .get(PAGING)
        .and_then(|paging| serde_json::from_value(paging.clone()).ok())
}
