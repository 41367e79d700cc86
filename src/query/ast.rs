//! Typed query configuration
//!
//! A `Query` is assumed valid once constructed: sort keys are an explicit
//! enum, so the engine never guesses a field from a column label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::QueryError;

/// Page size used when neither the request nor the config names one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sortable record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Category,
    Weight,
    Price,
    Calories,
    #[serde(alias = "in_stock")]
    InStock,
}

impl SortKey {
    /// Every sort key, in column order
    pub const ALL: [SortKey; 7] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Category,
        SortKey::Weight,
        SortKey::Price,
        SortKey::Calories,
        SortKey::InStock,
    ];

    /// Returns the record field name this key sorts on
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Weight => "weight",
            SortKey::Price => "price",
            SortKey::Calories => "calories",
            SortKey::InStock => "inStock",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "weight" => Ok(SortKey::Weight),
            "price" => Ok(SortKey::Price),
            "calories" => Ok(SortKey::Calories),
            "inStock" | "in_stock" => Ok(SortKey::InStock),
            other => Err(QueryError::unknown_sort_key(other)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    /// Returns the opposite direction
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" | "asc" => Ok(SortDirection::Ascending),
            "descending" | "desc" => Ok(SortDirection::Descending),
            other => Err(QueryError::unknown_sort_direction(other)),
        }
    }
}

/// Category clause of a query.
///
/// On the wire this is a plain string; `"all"` (any case) and the empty
/// string select every category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL_SENTINEL: &'static str = "all";

    /// Returns true if a record in `category` passes this clause.
    /// Matching is exact once a category is selected.
    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        CategoryFilter::from(s.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => CategoryFilter::ALL_SENTINEL.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Search, filter, sort and pagination settings for one visible page.
///
/// The filter and sort setters reset `page` to 1 so a narrowed result set
/// is always viewed from its first page; `with_page` is the only way to
/// move elsewhere. The engine itself never adjusts the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    pub search_text: String,
    pub category: CategoryFilter,
    pub in_stock_only: bool,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    /// 1-based page index
    pub page: usize,
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            in_stock_only: false,
            sort_key: SortKey::Id,
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Query {
    /// Creates the identity query: everything, sorted by id, first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self.page = 1;
        self
    }

    /// Sets the category clause
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self.page = 1;
        self
    }

    /// Restricts results to records in stock
    pub fn with_in_stock_only(mut self, in_stock_only: bool) -> Self {
        self.in_stock_only = in_stock_only;
        self.page = 1;
        self
    }

    /// Sets sort key and direction
    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self.page = 1;
        self
    }

    /// Column-header behavior: picking the active key flips the direction,
    /// picking another key sorts it ascending.
    pub fn toggle_sort(self, key: SortKey) -> Self {
        let direction = if self.sort_key == key {
            self.sort_direction.flip()
        } else {
            SortDirection::Ascending
        };
        self.with_sort(key, direction)
    }

    /// Selects a page (1-based)
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self.page = 1;
        self
    }

    /// Returns true if this query keeps every record in input order
    pub fn is_identity_filter(&self) -> bool {
        self.search_text.is_empty() && self.category == CategoryFilter::All && !self.in_stock_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_defaults() {
        let query = Query::new();
        assert_eq!(query.sort_key, SortKey::Id);
        assert_eq!(query.sort_direction, SortDirection::Ascending);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert!(query.is_identity_filter());
    }

    #[test]
    fn test_filter_setters_reset_page() {
        let query = Query::new().with_page(4).with_search("oat");
        assert_eq!(query.page, 1);

        let query = query.with_page(3).with_category("Bars");
        assert_eq!(query.page, 1);

        let query = query.with_page(2).with_in_stock_only(true);
        assert_eq!(query.page, 1);

        let query = query.with_page(5);
        assert_eq!(query.page, 5);
    }

    #[test]
    fn test_toggle_sort() {
        let query = Query::new().toggle_sort(SortKey::Name);
        assert_eq!(query.sort_key, SortKey::Name);
        assert_eq!(query.sort_direction, SortDirection::Ascending);

        let query = query.toggle_sort(SortKey::Name);
        assert_eq!(query.sort_direction, SortDirection::Descending);

        let query = query.toggle_sort(SortKey::Price);
        assert_eq!(query.sort_key, SortKey::Price);
        assert_eq!(query.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_key_parse() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("in_stock".parse::<SortKey>().unwrap(), SortKey::InStock);

        let err = "Name".parse::<SortKey>().unwrap_err();
        assert_eq!(err.field(), Some("sortKey"));
    }

    #[test]
    fn test_sort_direction_aliases() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("up".parse::<SortDirection>().is_err());

        let dir: SortDirection = serde_json::from_value(json!("desc")).unwrap();
        assert_eq!(dir, SortDirection::Descending);
    }

    #[test]
    fn test_category_sentinel() {
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("Chips"),
            CategoryFilter::Only("Chips".into())
        );

        assert!(CategoryFilter::All.admits("anything"));
        assert!(CategoryFilter::from("Chips").admits("Chips"));
        assert!(!CategoryFilter::from("Chips").admits("chips"));
    }

    #[test]
    fn test_query_json_shape() {
        let query = Query::new()
            .with_category("Bars")
            .with_sort(SortKey::InStock, SortDirection::Descending);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["category"], "Bars");
        assert_eq!(value["sortKey"], "inStock");
        assert_eq!(value["sortDirection"], "descending");
        assert_eq!(value["inStockOnly"], false);

        let back: Query = serde_json::from_value(value).unwrap();
        assert_eq!(back, query);
    }
}
