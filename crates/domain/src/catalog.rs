//! Apps catalog and changelog entries.

use serde::{Deserialize, Serialize};

/// One entry in the apps catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub id: i64,
    pub name: String,
    /// Icon identifier resolved by the front-end.
    pub icon: String,
    pub category: String,
    pub description: String,
    pub link: String,
}

impl AppEntry {
    /// Case-insensitive search over name and category.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }
}

/// One changelog entry from the updates feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntry {
    pub update_number: u32,
    pub version: String,
    /// Publication date as shipped in the feed (ISO 8601 date string).
    pub update_date: String,
    pub changes: Vec<String>,
}

/// Order updates latest-first for display.
pub fn sort_latest_first(updates: &mut [UpdateEntry]) {
    updates.sort_by(|a, b| b.update_number.cmp(&a.update_number));
}
