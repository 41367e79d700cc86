//! Category summaries built on the filter step

use crate::inventory::Snack;
use crate::query::Query;

use super::filters::SnackFilter;
use super::result::CategoryCount;

/// Distinct categories in first-appearance order
pub fn categories(records: &[Snack]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for snack in records {
        if !seen.iter().any(|c| c == &snack.category) {
            seen.push(snack.category.clone());
        }
    }
    seen
}

/// Number of records per category among those matching `query`.
///
/// Only the filter clauses of the query apply; sort and page are ignored.
/// Categories appear in first-appearance order.
pub fn category_distribution(records: &[Snack], query: &Query) -> Vec<CategoryCount> {
    let filter = SnackFilter::new(query);
    let mut counts: Vec<CategoryCount> = Vec::new();

    for snack in filter.apply(records) {
        match counts.iter_mut().find(|c| c.category == snack.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: snack.category.clone(),
                count: 1,
            }),
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::seed_records;

    #[test]
    fn test_categories_first_appearance() {
        let mut records = seed_records();
        records[3].category = "Bars".into();
        assert_eq!(categories(&records), vec!["Bars", "Nuts", "Chips"]);
    }

    #[test]
    fn test_distribution_whole_collection() {
        let dist = category_distribution(&seed_records(), &Query::new());
        assert_eq!(dist.len(), 4);
        assert!(dist.iter().all(|c| c.count == 1));
        assert_eq!(dist[0].category, "Bars");
    }

    #[test]
    fn test_distribution_respects_filter() {
        let query = Query::new().with_in_stock_only(true);
        let dist = category_distribution(&seed_records(), &query);
        assert!(dist.iter().all(|c| c.category != "Chips"));
        assert_eq!(dist.iter().map(|c| c.count).sum::<usize>(), 3);
    }

    #[test]
    fn test_empty_records() {
        assert!(categories(&[]).is_empty());
        assert!(category_distribution(&[], &Query::new()).is_empty());
    }
}
