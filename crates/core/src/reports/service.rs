//! Aggregate computation over the record store.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use tallybook_shared::types::money::round_money;

use crate::category::{display_label, normalize_key};
use crate::ledger::types::{DateRange, Invoice, InvoiceStatus};
use crate::ledger::RecordStore;
use crate::query::RecordKind;

use super::types::{FinancialSummary, Granularity, SeriesPoint, StatusCount};

/// Service computing dashboard aggregates.
///
/// Holds no state; every method derives its result from a fresh snapshot
/// of the store. All arithmetic is exact decimal addition, so summation
/// order never changes a result.
pub struct ReportService;

impl ReportService {
    /// Sums amounts per category within the optional date range.
    ///
    /// For expenses the expense amount counts; for invoices the subtotals
    /// of categorized line items count (uncategorized lines contribute
    /// nothing). The map is sparse: categories without matching records in
    /// range are omitted, keyed by first-seen display label and grouped
    /// case-insensitively.
    #[must_use]
    pub fn totals_by_category(
        store: &RecordStore,
        kind: RecordKind,
        range: &DateRange,
    ) -> BTreeMap<String, Decimal> {
        let mut grouped: BTreeMap<String, (String, Decimal)> = BTreeMap::new();

        match kind {
            RecordKind::Expense => {
                for expense in store.expenses() {
                    if range.contains(expense.date) {
                        Self::accumulate(&mut grouped, &expense.category, expense.amount);
                    }
                }
            }
            RecordKind::Invoice => {
                for invoice in store.invoices() {
                    if !range.contains(invoice.issue_date) {
                        continue;
                    }
                    for line in &invoice.line_items {
                        if let Some(label) = &line.category {
                            Self::accumulate(&mut grouped, label, line.subtotal());
                        }
                    }
                }
            }
        }

        grouped.into_values().collect()
    }

    /// Buckets record amounts into a gap-free chronological series.
    ///
    /// Bucket starts are the day itself (daily) or the first of the month
    /// (monthly). Every period between the range bounds is present,
    /// zero-filled when empty. An unbounded side of the range resolves to
    /// the earliest/latest record date of the requested kind; with no
    /// records and no bound the series is empty.
    #[must_use]
    pub fn series_by_period(
        store: &RecordStore,
        kind: RecordKind,
        granularity: Granularity,
        range: &DateRange,
    ) -> Vec<SeriesPoint> {
        let records = Self::dated_amounts(store, kind);

        let from = range.from.or_else(|| records.iter().map(|(d, _)| *d).min());
        let to = range.to.or_else(|| records.iter().map(|(d, _)| *d).max());
        let (Some(from), Some(to)) = (from, to) else {
            return Vec::new();
        };
        if from > to {
            return Vec::new();
        }

        let mut sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for (date, amount) in records {
            if date >= from && date <= to {
                *sums
                    .entry(Self::bucket_start(date, granularity))
                    .or_insert(Decimal::ZERO) += amount;
            }
        }

        let mut series = Vec::new();
        let mut current = Self::bucket_start(from, granularity);
        let end = Self::bucket_start(to, granularity);
        while current <= end {
            series.push(SeriesPoint {
                period_start: current,
                amount: sums.get(&current).copied().unwrap_or(Decimal::ZERO),
            });
            match Self::next_bucket(current, granularity) {
                Some(next) => current = next,
                None => break,
            }
        }
        series
    }

    /// Paid invoice totals minus expense amounts within the range.
    ///
    /// Draft, sent, overdue, and cancelled invoices contribute nothing:
    /// only `Paid` counts as revenue.
    #[must_use]
    pub fn net_position(store: &RecordStore, range: &DateRange) -> Decimal {
        let revenue: Decimal = store
            .invoices()
            .iter()
            .filter(|invoice| {
                invoice.status.counts_as_revenue() && range.contains(invoice.issue_date)
            })
            .map(Invoice::total)
            .sum();
        let spent: Decimal = store
            .expenses()
            .iter()
            .filter(|expense| range.contains(expense.date))
            .map(|expense| expense.amount)
            .sum();
        revenue - spent
    }

    /// The headline figures for the summary card.
    #[must_use]
    pub fn financial_summary(store: &RecordStore, range: &DateRange) -> FinancialSummary {
        let invoices = store.invoices();
        let total_invoiced: Decimal = invoices
            .iter()
            .filter(|invoice| range.contains(invoice.issue_date))
            .map(Invoice::total)
            .sum();
        let total_paid: Decimal = invoices
            .iter()
            .filter(|invoice| {
                invoice.status.counts_as_revenue() && range.contains(invoice.issue_date)
            })
            .map(Invoice::total)
            .sum();
        let total_expenses: Decimal = store
            .expenses()
            .iter()
            .filter(|expense| range.contains(expense.date))
            .map(|expense| expense.amount)
            .sum();

        let net_profit = total_paid - total_expenses;
        // Flat 10% estimate, carried over from the original report card.
        let tax_rate = Decimal::new(10, 2);
        let estimated_tax = if net_profit > Decimal::ZERO {
            round_money(net_profit * tax_rate)
        } else {
            Decimal::ZERO
        };

        FinancialSummary {
            total_invoiced,
            total_paid,
            total_expenses,
            net_profit,
            estimated_tax,
        }
    }

    /// Invoice counts per status, one entry per status in lifecycle order
    /// (zero-filled, chart-friendly).
    #[must_use]
    pub fn status_breakdown(store: &RecordStore) -> Vec<StatusCount> {
        let invoices = store.invoices();
        InvoiceStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: invoices
                    .iter()
                    .filter(|invoice| invoice.status == *status)
                    .count(),
            })
            .collect()
    }

    fn accumulate(
        grouped: &mut BTreeMap<String, (String, Decimal)>,
        label: &str,
        amount: Decimal,
    ) {
        let key = normalize_key(label);
        if key.is_empty() {
            return;
        }
        let entry = grouped
            .entry(key)
            .or_insert_with(|| (display_label(label), Decimal::ZERO));
        entry.1 += amount;
    }

    fn dated_amounts(store: &RecordStore, kind: RecordKind) -> Vec<(NaiveDate, Decimal)> {
        match kind {
            RecordKind::Invoice => store
                .invoices()
                .iter()
                .map(|invoice| (invoice.issue_date, invoice.total()))
                .collect(),
            RecordKind::Expense => store
                .expenses()
                .iter()
                .map(|expense| (expense.date, expense.amount))
                .collect(),
        }
    }

    fn bucket_start(date: NaiveDate, granularity: Granularity) -> NaiveDate {
        match granularity {
            Granularity::Daily => date,
            // Day 1 exists in every month.
            Granularity::Monthly => date.with_day(1).unwrap_or(date),
        }
    }

    fn next_bucket(start: NaiveDate, granularity: Granularity) -> Option<NaiveDate> {
        match granularity {
            Granularity::Daily => start.succ_opt(),
            Granularity::Monthly => start.checked_add_months(Months::new(1)),
        }
    }
}
