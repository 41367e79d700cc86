//! Page slicing for query execution
//!
//! `start = (page - 1) * page_size`, slice `[start, start + page_size)`
//! clamped to the available range. A page past the end is empty; the
//! page number itself is never clamped.

use crate::query::{QueryError, QueryResult};

use super::result::Page;

/// Slices ordered results into pages
pub struct Paginator;

impl Paginator {
    /// Returns page `page` (1-based) of `ordered`.
    ///
    /// # Errors
    ///
    /// Returns SNACK_QUERY_INVALID if `page` or `page_size` is zero.
    pub fn paginate<T: Clone>(
        ordered: &[T],
        page: usize,
        page_size: usize,
    ) -> QueryResult<Page<T>> {
        Self::check(page, page_size)?;

        let total_items = ordered.len();
        let total_pages = Self::total_pages(total_items, page_size);

        let start = (page - 1).saturating_mul(page_size);
        let page_items = if start >= total_items {
            Vec::new()
        } else {
            let end = start.saturating_add(page_size).min(total_items);
            ordered[start..end].to_vec()
        };

        Ok(Page {
            page_items,
            total_items,
            total_pages,
        })
    }

    /// `ceil(total_items / page_size)`, at least 1
    pub fn total_pages(total_items: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        total_items.div_ceil(page_size).max(1)
    }

    /// Rejects zero page numbers and page sizes
    pub fn check(page: usize, page_size: usize) -> QueryResult<()> {
        if page < 1 {
            return Err(QueryError::invalid_page(0));
        }
        if page_size < 1 {
            return Err(QueryError::invalid_page_size(0));
        }
        Ok(())
    }
}
