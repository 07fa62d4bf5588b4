use api_types::expense::Category;
use chrono::NaiveDate;

use crate::Money;

/// One synchronized transaction as held by the client.
///
/// `id` is assigned by the backend and immutable once set; records are never
/// edited in place (an edit is a delete followed by a create).
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRecord {
    pub id: i64,
    pub amount: Money,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

/// The client's view of the ledger: a verbatim mirror of the most recent
/// successful list response for the active filter.
///
/// The store is only ever mutated by wholesale replacement. Add/delete
/// results are never patched in locally; the re-fetch that follows a
/// mutation is what updates the view.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically swaps the store's contents with `records`.
    ///
    /// This is the only mutation path; there is no incremental insert or
    /// remove into the live store.
    pub fn replace_all(&mut self, records: Vec<ExpenseRecord>) {
        self.records = records;
    }

    /// Sum of all record amounts, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Money {
        self.records
            .iter()
            .fold(Money::ZERO, |acc, record| acc + record.amount)
    }

    /// Distinguishes "no data for this filter" from a loading state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Read access to the current view, in response order.
    #[must_use]
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, minor: i64) -> ExpenseRecord {
        ExpenseRecord {
            id,
            amount: Money::from_minor(minor),
            category: Category::Others,
            description: "UserEntry".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn replace_all_replaces_never_merges() {
        let mut store = ExpenseStore::new();
        store.replace_all(vec![record(1, 100), record(2, 200)]);
        store.replace_all(vec![record(3, 300)]);

        let ids: Vec<i64> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn total_sums_minor_units() {
        let mut store = ExpenseStore::new();
        store.replace_all(vec![record(1, 250), record(2, 1899), record(3, 50)]);

        assert_eq!(store.total().minor(), 2199);
        assert_eq!(store.total().to_string(), "21.99");
    }

    #[test]
    fn total_of_empty_store_is_zero() {
        let store = ExpenseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.total(), Money::ZERO);
    }

    #[test]
    fn keeps_response_order() {
        let mut store = ExpenseStore::new();
        store.replace_all(vec![record(9, 1), record(4, 2), record(7, 3)]);

        let ids: Vec<i64> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 4, 7]);
        assert_eq!(store.len(), 3);
    }
}
