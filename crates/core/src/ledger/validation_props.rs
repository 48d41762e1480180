//! Property-based tests for draft validation and store invariants.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::store::RecordStore;
use super::types::{ExpenseDraft, InvoiceDraft, LineItem};

/// Strategy to generate positive decimal amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate non-negative decimal amounts (0.00 to 10,000.00).
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate dates within a few years of 2024.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2028, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 is valid in every month")
    })
}

fn make_line(quantity: Decimal, unit_price: Decimal) -> LineItem {
    LineItem {
        description: "Line".to_string(),
        quantity,
        unit_price,
        category: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any valid draft, `add_invoice` then `invoice(id)` returns a
    /// record whose total equals the sum of quantity * unit_price over its
    /// line items.
    #[test]
    fn prop_invoice_total_equals_sum_of_lines(
        lines in prop::collection::vec((positive_amount(), non_negative_amount()), 1..8),
        issue in any_date(),
        offset_days in 0i64..365,
    ) {
        let due = issue + chrono::Days::new(offset_days.unsigned_abs());
        let draft = InvoiceDraft {
            client: "Acme".to_string(),
            issue_date: issue,
            due_date: due,
            line_items: lines
                .iter()
                .map(|(quantity, unit_price)| make_line(*quantity, *unit_price))
                .collect(),
        };

        let mut store = RecordStore::new();
        let invoice = store.add_invoice(draft).unwrap();
        let fetched = store.invoice(invoice.id).unwrap();

        let expected: Decimal = lines
            .iter()
            .map(|(quantity, unit_price)| {
                tallybook_shared::types::money::round_money(quantity * unit_price)
            })
            .sum();
        prop_assert_eq!(fetched.total(), expected);
    }

    /// For any draft with a due date before the issue date, validation
    /// SHALL fail and the store SHALL stay empty.
    #[test]
    fn prop_due_before_issue_always_rejected(
        issue in any_date(),
        offset_days in 1i64..365,
        amount in positive_amount(),
    ) {
        let due = issue - chrono::Days::new(offset_days.unsigned_abs());
        let draft = InvoiceDraft {
            client: "Acme".to_string(),
            issue_date: issue,
            due_date: due,
            line_items: vec![make_line(Decimal::ONE, amount)],
        };

        let mut store = RecordStore::new();
        prop_assert!(store.add_invoice(draft).is_err());
        prop_assert!(store.invoices().is_empty());
        prop_assert!(!store.is_dirty());
    }

    /// For any non-negative amount, an expense draft with non-blank labels
    /// SHALL be accepted, and the stored amount SHALL be exactly the draft
    /// amount (no precision loss).
    #[test]
    fn prop_expense_amount_preserved_exactly(
        amount in non_negative_amount(),
        day in any_date(),
    ) {
        let mut store = RecordStore::new();
        let expense = store
            .add_expense(ExpenseDraft {
                date: day,
                category: "Office".to_string(),
                amount,
                description: "Supplies".to_string(),
            })
            .unwrap();

        prop_assert_eq!(store.expense(expense.id).unwrap().amount, amount);
    }

    /// Deleting any stored invoice makes subsequent lookups fail, and a
    /// second delete fails too (no silent idempotence).
    #[test]
    fn prop_delete_removes_invoice(
        amount in positive_amount(),
        day in any_date(),
    ) {
        let mut store = RecordStore::new();
        let invoice = store
            .add_invoice(InvoiceDraft {
                client: "Acme".to_string(),
                issue_date: day,
                due_date: day,
                line_items: vec![make_line(Decimal::ONE, amount)],
            })
            .unwrap();

        store.delete_invoice(invoice.id).unwrap();
        prop_assert!(store.invoice(invoice.id).is_err());
        prop_assert!(store.delete_invoice(invoice.id).is_err());
    }
}
