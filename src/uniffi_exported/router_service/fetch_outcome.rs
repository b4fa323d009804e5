use crate::prelude::*;

/// Result of fetching a top chart: `success` is `false` with no items when
/// the request or the response failed.
#[derive(Record, Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchOutcome {
    pub success: bool,
    pub items: Vec<AppItem>,
}

impl FetchOutcome {
    pub fn success(items: Vec<AppItem>) -> Self {
        Self { success: true, items }
    }

    pub fn failure() -> Self {
        Self::default()
    }
}
