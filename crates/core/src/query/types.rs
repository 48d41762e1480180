//! Query criteria and result types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::types::{Expense, Invoice, InvoiceStatus};

/// The two kinds of ledger record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// An invoice issued to a client.
    Invoice,
    /// A recorded business expense.
    Expense,
}

/// Sort key for query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Issue date (invoices) / expense date. The default.
    #[default]
    Date,
    /// Invoice total / expense amount.
    Amount,
    /// Client name (invoices) / category label (expenses).
    Client,
}

/// Filter and ordering configuration for [`QueryService::query`].
///
/// All criteria compose with logical AND; the default value matches every
/// record, sorted by date ascending.
///
/// [`QueryService::query`]: super::service::QueryService::query
#[derive(Debug, Clone, Default)]
pub struct QueryCriteria {
    /// Restrict results to one record kind.
    pub kind: Option<RecordKind>,
    /// Inclusive lower bound on the record date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the record date.
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive category match (expense category or any line-item
    /// category).
    pub category: Option<String>,
    /// Exact status match; only invoices can satisfy a status criterion.
    pub status: Option<InvoiceStatus>,
    /// Case-insensitive substring match against descriptions, client
    /// names, and category labels.
    pub text: Option<String>,
    /// Sort key.
    pub sort_by: SortBy,
    /// Reverse the sort key (identifier tie-breaks stay ascending).
    pub sort_descending: bool,
}

impl QueryCriteria {
    /// Creates criteria matching everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one record kind.
    #[must_use]
    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the inclusive date range bounds.
    #[must_use]
    pub const fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Filters by category label (case-insensitive).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filters invoices by exact status.
    #[must_use]
    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Adds a free-text search needle.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the sort key and direction.
    #[must_use]
    pub const fn sorted_by(mut self, sort_by: SortBy, descending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_descending = descending;
        self
    }
}

/// An owned view of one matched record.
///
/// Query results are defensive copies: mutating a returned record cannot
/// touch the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Record {
    /// A matched invoice.
    Invoice(Invoice),
    /// A matched expense.
    Expense(Expense),
}

impl Record {
    /// Which kind of record this is.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Invoice(_) => RecordKind::Invoice,
            Self::Expense(_) => RecordKind::Expense,
        }
    }

    /// The record's business date: issue date for invoices, expense date
    /// for expenses.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Invoice(invoice) => invoice.issue_date,
            Self::Expense(expense) => expense.date,
        }
    }

    /// The record's amount: invoice total or expense amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Invoice(invoice) => invoice.total(),
            Self::Expense(expense) => expense.amount,
        }
    }

    /// The label used by the `Client` sort key: client name for invoices;
    /// expenses have no counterparty, so their category label substitutes.
    #[must_use]
    pub fn client_label(&self) -> &str {
        match self {
            Self::Invoice(invoice) => &invoice.client,
            Self::Expense(expense) => &expense.category,
        }
    }

    /// The underlying identifier, as the tie-breaking sort key.
    #[must_use]
    pub fn id_uuid(&self) -> Uuid {
        match self {
            Self::Invoice(invoice) => invoice.id.into_inner(),
            Self::Expense(expense) => expense.id.into_inner(),
        }
    }
}
