//! Property-based tests for the aggregation engine.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::ledger::types::{DateRange, ExpenseDraft};
use crate::ledger::RecordStore;
use crate::query::RecordKind;

use super::service::ReportService;
use super::types::Granularity;

/// Strategy to generate non-negative decimal amounts (0.00 to 10,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate dates in 2023-2026.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2023i32..2027, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 is valid in every month")
    })
}

/// Strategy to generate a small pool of category labels.
fn category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Office".to_string()),
        Just("Travel".to_string()),
        Just("Software".to_string()),
        Just("Utilities".to_string()),
    ]
}

fn seed_expenses(entries: &[(NaiveDate, Decimal, String)]) -> RecordStore {
    let mut store = RecordStore::new();
    for (date, amount, label) in entries {
        store
            .add_expense(ExpenseDraft {
                date: *date,
                category: label.clone(),
                amount: *amount,
                description: "Entry".to_string(),
            })
            .unwrap();
    }
    store
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + i32::try_from(date.month()).expect("month fits in i32")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For a bounded range spanning N periods, `series_by_period` SHALL
    /// return exactly N buckets, chronological, each with amount >= 0.
    #[test]
    fn prop_series_has_no_gaps(
        entries in prop::collection::vec((any_date(), amount(), category()), 0..12),
        from in any_date(),
        span_months in 0u32..24,
    ) {
        let to = from
            .checked_add_months(chrono::Months::new(span_months))
            .expect("dates stay in range");
        let store = seed_expenses(&entries);

        let series = ReportService::series_by_period(
            &store,
            RecordKind::Expense,
            Granularity::Monthly,
            &DateRange::new(from, to),
        );

        let expected_buckets = month_index(to) - month_index(from) + 1;
        prop_assert_eq!(series.len(), usize::try_from(expected_buckets).unwrap());

        for window in series.windows(2) {
            prop_assert!(window[0].period_start < window[1].period_start);
        }
        for point in &series {
            prop_assert_eq!(point.period_start.day(), 1);
            prop_assert!(point.amount >= Decimal::ZERO);
        }
    }

    /// The bucket sums of a series SHALL add up to exactly the sum of the
    /// in-range records (decimal addition is exact, so equality is exact).
    #[test]
    fn prop_series_conserves_total(
        entries in prop::collection::vec((any_date(), amount(), category()), 0..12),
        from in any_date(),
        span_days in 0u64..120,
    ) {
        let to = from + chrono::Days::new(span_days);
        let store = seed_expenses(&entries);

        let series = ReportService::series_by_period(
            &store,
            RecordKind::Expense,
            Granularity::Daily,
            &DateRange::new(from, to),
        );

        let bucketed: Decimal = series.iter().map(|point| point.amount).sum();
        let expected: Decimal = entries
            .iter()
            .filter(|(date, _, _)| *date >= from && *date <= to)
            .map(|(_, amount, _)| *amount)
            .sum();
        prop_assert_eq!(bucketed, expected);
    }

    /// `totals_by_category` SHALL contain exactly the distinct normalized
    /// categories present in range - no zero-filled strays.
    #[test]
    fn prop_category_totals_are_sparse(
        entries in prop::collection::vec((any_date(), amount(), category()), 0..16),
        from in any_date(),
        span_days in 0u64..365,
    ) {
        let to = from + chrono::Days::new(span_days);
        let store = seed_expenses(&entries);

        let totals = ReportService::totals_by_category(
            &store,
            RecordKind::Expense,
            &DateRange::new(from, to),
        );

        let mut distinct: Vec<&str> = entries
            .iter()
            .filter(|(date, _, _)| *date >= from && *date <= to)
            .map(|(_, _, label)| label.as_str())
            .collect();
        distinct.sort_unstable();
        distinct.dedup();

        prop_assert_eq!(totals.len(), distinct.len());
        let total_sum: Decimal = totals.values().copied().sum();
        let expected_sum: Decimal = entries
            .iter()
            .filter(|(date, _, _)| *date >= from && *date <= to)
            .map(|(_, amount, _)| *amount)
            .sum();
        prop_assert_eq!(total_sum, expected_sum);
    }

    /// Net position over expenses only SHALL be the negated expense sum
    /// (no invoices means no revenue).
    #[test]
    fn prop_net_position_without_invoices_is_negative_spend(
        entries in prop::collection::vec((any_date(), amount(), category()), 0..12),
    ) {
        let store = seed_expenses(&entries);
        let spent: Decimal = entries.iter().map(|(_, amount, _)| *amount).sum();

        let net = ReportService::net_position(&store, &DateRange::unbounded());
        prop_assert_eq!(net, -spent);
    }
}
