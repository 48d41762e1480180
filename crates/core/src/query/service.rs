//! Query execution over the record store.

use std::cmp::Ordering;

use crate::category::normalize_key;
use crate::ledger::types::{Expense, Invoice};
use crate::ledger::RecordStore;

use super::types::{QueryCriteria, Record, RecordKind, SortBy};

/// Query engine over a record store.
///
/// Holds no state: every call works on a fresh snapshot of the store, so
/// results are mutation-isolated and the engine never observes a record
/// mid-update.
pub struct QueryService;

impl QueryService {
    /// Runs the given criteria over the store.
    ///
    /// Matching is a single pass; all criteria AND-compose. Ordering is
    /// deterministic: the configured sort key (reversed when descending),
    /// with ties always broken by ascending record identifier. An empty
    /// result set is valid.
    #[must_use]
    pub fn query(store: &RecordStore, criteria: &QueryCriteria) -> Vec<Record> {
        let mut results: Vec<Record> = Vec::new();

        if criteria.kind != Some(RecordKind::Expense) {
            for invoice in store.invoices() {
                if Self::matches_invoice(&invoice, criteria) {
                    results.push(Record::Invoice(invoice));
                }
            }
        }
        if criteria.kind != Some(RecordKind::Invoice) {
            for expense in store.expenses() {
                if Self::matches_expense(&expense, criteria) {
                    results.push(Record::Expense(expense));
                }
            }
        }

        results.sort_by(|a, b| Self::compare(a, b, criteria));
        results
    }

    fn compare(a: &Record, b: &Record, criteria: &QueryCriteria) -> Ordering {
        let mut ordering = match criteria.sort_by {
            SortBy::Date => a.date().cmp(&b.date()),
            SortBy::Amount => a.amount().cmp(&b.amount()),
            SortBy::Client => a.client_label().cmp(b.client_label()),
        };
        if criteria.sort_descending {
            ordering = ordering.reverse();
        }
        ordering.then_with(|| a.id_uuid().cmp(&b.id_uuid()))
    }

    fn in_date_range(date: chrono::NaiveDate, criteria: &QueryCriteria) -> bool {
        criteria.date_from.is_none_or(|from| date >= from)
            && criteria.date_to.is_none_or(|to| date <= to)
    }

    fn matches_invoice(invoice: &Invoice, criteria: &QueryCriteria) -> bool {
        if !Self::in_date_range(invoice.issue_date, criteria) {
            return false;
        }

        if let Some(status) = criteria.status
            && invoice.status != status
        {
            return false;
        }

        if let Some(category) = &criteria.category {
            let wanted = normalize_key(category);
            let any_line_matches = invoice.line_items.iter().any(|line| {
                line.category
                    .as_deref()
                    .is_some_and(|label| normalize_key(label) == wanted)
            });
            if !any_line_matches {
                return false;
            }
        }

        if let Some(text) = &criteria.text {
            let needle = text.to_lowercase();
            let in_client = invoice.client.to_lowercase().contains(&needle);
            let in_lines = invoice.line_items.iter().any(|line| {
                line.description.to_lowercase().contains(&needle)
                    || line
                        .category
                        .as_deref()
                        .is_some_and(|label| label.to_lowercase().contains(&needle))
            });
            if !in_client && !in_lines {
                return false;
            }
        }

        true
    }

    fn matches_expense(expense: &Expense, criteria: &QueryCriteria) -> bool {
        if !Self::in_date_range(expense.date, criteria) {
            return false;
        }

        // A status criterion is a predicate only invoices can satisfy.
        if criteria.status.is_some() {
            return false;
        }

        if let Some(category) = &criteria.category
            && normalize_key(&expense.category) != normalize_key(category)
        {
            return false;
        }

        if let Some(text) = &criteria.text {
            let needle = text.to_lowercase();
            if !expense.description.to_lowercase().contains(&needle)
                && !expense.category.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        true
    }
}
