//! Aggregates feeding the dashboard charts.
//!
//! This module provides pure derivations over the record store:
//! - Per-category totals (sparse, for the pie chart)
//! - Per-period series (gap-free, for the bar/line charts)
//! - Net position and the financial summary card
//! - Invoice status breakdown

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::ReportService;
pub use types::{FinancialSummary, Granularity, SeriesPoint, StatusCount};
