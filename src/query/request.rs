//! Request boundary for queries
//!
//! A `QueryRequest` carries the raw option values supplied by a caller.
//! `validate` turns it into a typed [`Query`] or rejects it with
//! SNACK_QUERY_INVALID. Nothing is clamped or defaulted away silently:
//! only options that were omitted fall back to the defaults, and an option
//! name that is not recognized rejects the whole request.

use serde::{Deserialize, Serialize};

use super::ast::{CategoryFilter, Query, SortDirection, SortKey};
use super::errors::{QueryError, QueryResult};

/// Defaults applied to options a request leaves out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDefaults {
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub page_size: usize,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        let query = Query::default();
        Self {
            sort_key: query.sort_key,
            sort_direction: query.sort_direction,
            page_size: query.page_size,
        }
    }
}

/// Untyped query as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct QueryRequest {
    pub search_text: Option<String>,
    pub category: Option<String>,
    pub in_stock_only: Option<bool>,
    pub sort_key: Option<String>,
    pub sort_direction: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl QueryRequest {
    /// Parses a request from a JSON value
    pub fn from_json(value: serde_json::Value) -> QueryResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| QueryError::invalid(format!("Malformed query: {}", e)))
    }

    /// Validates the request into a typed query.
    ///
    /// # Errors
    ///
    /// Returns SNACK_QUERY_INVALID if:
    /// - `sortKey` names no record field
    /// - `sortDirection` is not ascending/descending
    /// - `page` < 1
    /// - `pageSize` < 1
    pub fn validate(&self, defaults: &QueryDefaults) -> QueryResult<Query> {
        let sort_key = match &self.sort_key {
            Some(key) => key.parse::<SortKey>()?,
            None => defaults.sort_key,
        };

        let sort_direction = match &self.sort_direction {
            Some(direction) => direction.parse::<SortDirection>()?,
            None => defaults.sort_direction,
        };

        let page = match self.page {
            Some(p) if p < 1 => return Err(QueryError::invalid_page(p)),
            Some(p) => to_usize(p, "page")?,
            None => 1,
        };

        let page_size = match self.page_size {
            Some(s) if s < 1 => return Err(QueryError::invalid_page_size(s)),
            Some(s) => to_usize(s, "pageSize")?,
            None => defaults.page_size,
        };

        Ok(Query {
            search_text: self.search_text.clone().unwrap_or_default(),
            category: self
                .category
                .clone()
                .map(CategoryFilter::from)
                .unwrap_or_default(),
            in_stock_only: self.in_stock_only.unwrap_or(false),
            sort_key,
            sort_direction,
            page,
            page_size,
        })
    }
}

fn to_usize(value: i64, field: &str) -> QueryResult<usize> {
    usize::try_from(value)
        .map_err(|_| QueryError::invalid(format!("{} out of range: {}", field, value)))
}
