//! Aggregate data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::types::InvoiceStatus;

/// Time-series bucket width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per day.
    Daily,
    /// One bucket per calendar month.
    Monthly,
}

/// One bucket of a time series.
///
/// Series are gap-free: a bucket is present for every period in range,
/// zero-filled when nothing happened, so charts never have to interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// First day of the period (the day itself for daily buckets).
    pub period_start: NaiveDate,
    /// Sum of record amounts in the period.
    pub amount: Decimal,
}

/// The financial summary card: headline figures over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Total of all invoices issued in range, regardless of status.
    pub total_invoiced: Decimal,
    /// Total of paid invoices in range.
    pub total_paid: Decimal,
    /// Total of expenses in range.
    pub total_expenses: Decimal,
    /// Paid revenue minus expenses.
    pub net_profit: Decimal,
    /// Flat 10% estimate over positive net profit, zero otherwise.
    pub estimated_tax: Decimal,
}

/// Invoice count for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// The status counted.
    pub status: InvoiceStatus,
    /// Number of invoices currently in that status.
    pub count: usize,
}
