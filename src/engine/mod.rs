//! Query engine for snackdb
//!
//! Turns a record snapshot and a validated query into one visible page.
//!
//! # Execution Flow (strict order)
//!
//! 1. Check page and page size
//! 2. Filter records (order preserving)
//! 3. Stable sort by the query's key and direction
//! 4. Slice the requested page
//!
//! # Invariants
//!
//! - Pure: no I/O, no state kept between calls, input never mutated
//! - Deterministic: same records + same query = same page
//! - Empty results are a normal outcome, never an error

mod filters;
mod paginator;
mod result;
mod sorter;
mod summary;

pub use filters::SnackFilter;
pub use paginator::Paginator;
pub use result::{CategoryCount, Page};
pub use sorter::ResultSorter;
pub use summary::{categories, category_distribution};

use crate::inventory::Snack;
use crate::query::{Query, QueryResult, SortDirection, SortKey};

/// Records matching the filter clauses of `query`, in input order
pub fn filter<'a>(records: &'a [Snack], query: &Query) -> Vec<&'a Snack> {
    SnackFilter::new(query).apply(records)
}

/// Stable sort of `matching` by `key` in `direction`
pub fn sort(mut matching: Vec<&Snack>, key: SortKey, direction: SortDirection) -> Vec<&Snack> {
    ResultSorter::sort(&mut matching, key, direction);
    matching
}

/// Page `page` (1-based) of `ordered`
pub fn paginate<T: Clone>(ordered: &[T], page: usize, page_size: usize) -> QueryResult<Page<T>> {
    Paginator::paginate(ordered, page, page_size)
}

/// Filters, sorts and paginates `records` according to `query`.
///
/// # Errors
///
/// Returns SNACK_QUERY_INVALID, before doing any work, if the query's
/// page or page size is zero.
pub fn run_query(records: &[Snack], query: &Query) -> QueryResult<Page<Snack>> {
    Paginator::check(query.page, query.page_size)?;

    let matching = filter(records, query);
    let ordered = sort(matching, query.sort_key, query.sort_direction);
    let page = paginate(&ordered, query.page, query.page_size)?;

    Ok(page.map(Snack::clone))
}
