use crate::paging::PagingStrategy;

use libs::log;
use strum::{Display, EnumString, IntoStaticStr};

/// LinkedIn API generation a collection comes from. It decides how the
/// position of a page is reported and under which key the entries are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum ApiVersion {
    /// Legacy collections: `_start`, `_count` and `_total` next to a
    /// `values` array.
    #[default]
    #[strum(serialize = "v1")]
    V1,
    /// Current collections: a `paging` object with `start` and `count` next
    /// to an `elements` array.
    #[strum(serialize = "v2")]
    V2,
}

impl ApiVersion {
    /// Resolves a version code, `"v1"` or `"v2"` (case sensitive).
    ///
    /// Unknown codes never fail: a warning is logged and
    /// [`ApiVersion::default`] is used instead. Use [`str::parse`] for the
    /// strict variant.
    #[must_use]
    pub fn resolve(version: &str) -> Self {
        version.parse().unwrap_or_else(|_| {
            let fallback = Self::default();
            log::warn!("Unknown LinkedIn API version {version:?}, falling back to {fallback}");
            fallback
        })
    }

    /// Key of the response object holding the entries of a collection.
    #[must_use]
    pub fn data_key(self) -> &'static str {
        match self {
            Self::V1 => "values",
            Self::V2 => "elements",
        }
    }

    /// A fresh strategy for one response of this version.
    #[must_use]
    pub fn paging_strategy(self) -> PagingStrategy {
        PagingStrategy::new(self)
    }
}
