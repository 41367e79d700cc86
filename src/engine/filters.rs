//! Record filtering for query execution
//!
//! A record passes when all three clauses hold:
//! - search: `searchText` is a case-insensitive substring of the name or of
//!   any ingredient (empty text matches everything)
//! - category: the query selects all categories or exactly this one
//! - stock: the query does not ask for in-stock only, or the record is in stock

use crate::inventory::Snack;
use crate::query::{CategoryFilter, Query};

/// Evaluates the filter clauses of a query against records
pub struct SnackFilter<'q> {
    /// Lowercased search text, computed once per query
    needle: String,
    category: &'q CategoryFilter,
    in_stock_only: bool,
}

impl<'q> SnackFilter<'q> {
    /// Prepares the filter clauses of `query`
    pub fn new(query: &'q Query) -> Self {
        Self {
            needle: query.search_text.to_lowercase(),
            category: &query.category,
            in_stock_only: query.in_stock_only,
        }
    }

    /// Checks if a record passes every clause (AND semantics)
    pub fn matches(&self, snack: &Snack) -> bool {
        self.matches_search(snack)
            && self.category.admits(&snack.category)
            && (!self.in_stock_only || snack.in_stock)
    }

    fn matches_search(&self, snack: &Snack) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        snack.name.to_lowercase().contains(&self.needle)
            || snack
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&self.needle))
    }

    /// Returns the matching records in input order
    pub fn apply<'a>(&self, records: &'a [Snack]) -> Vec<&'a Snack> {
        records.iter().filter(|s| self.matches(s)).collect()
    }
}
