//! Result sorting for query execution
//!
//! Ordering rules per field:
//! - id, price, calories: numeric
//! - name, category, weight: byte-wise lexicographic, no locale
//! - inStock: false < true
//!
//! Sort is stable. Descending flips each comparison instead of reversing
//! the output, so records with equal keys keep their input order in both
//! directions.

use std::cmp::Ordering;

use crate::inventory::Snack;
use crate::query::{SortDirection, SortKey};

/// A field value extracted for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue<'a> {
    Flag(bool),
    Number(u64),
    Text(&'a str),
}

/// Sorts matched records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records by `key` in `direction`
    pub fn sort(records: &mut [&Snack], key: SortKey, direction: SortDirection) {
        records.sort_by(|a, b| Self::compare_directed(a, b, key, direction));
    }

    /// Three-way comparison honoring the direction
    pub fn compare_directed(
        a: &Snack,
        b: &Snack,
        key: SortKey,
        direction: SortDirection,
    ) -> Ordering {
        let ordering = Self::compare(a, b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Ascending three-way comparison on one field
    pub fn compare(a: &Snack, b: &Snack, key: SortKey) -> Ordering {
        Self::value(a, key).cmp(&Self::value(b, key))
    }

    fn value(snack: &Snack, key: SortKey) -> SortValue<'_> {
        match key {
            SortKey::Id => SortValue::Number(snack.id),
            SortKey::Name => SortValue::Text(&snack.name),
            SortKey::Category => SortValue::Text(&snack.category),
            SortKey::Weight => SortValue::Text(&snack.weight),
            SortKey::Price => SortValue::Number(snack.price),
            SortKey::Calories => SortValue::Number(u64::from(snack.calories)),
            SortKey::InStock => SortValue::Flag(snack.in_stock),
        }
    }
}
