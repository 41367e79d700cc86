//! Result types for query execution

use serde::{Deserialize, Serialize};

/// One visible page of query results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page, in result order
    pub page_items: Vec<T>,
    /// Records matching the query across all pages
    pub total_items: usize,
    /// Always at least 1, even with no matches
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Returns true if this page holds no records
    pub fn is_empty(&self) -> bool {
        self.page_items.is_empty()
    }

    /// Returns the number of records on this page
    pub fn len(&self) -> usize {
        self.page_items.len()
    }

    /// Returns an iterator over the records on this page
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.page_items.iter()
    }

    /// Converts each record, keeping the totals
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page_items: self.page_items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Count of matching records in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}
