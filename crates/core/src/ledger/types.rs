//! Ledger domain types for invoices and expenses.
//!
//! This module defines the records the engine owns, the draft/patch inputs
//! used to create and update them, and the invoice status state machine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tallybook_shared::types::money::round_money;
use tallybook_shared::types::{ExpenseId, InvoiceId};

/// Invoice status lifecycle.
///
/// The permitted transitions are `Draft→Sent`, `Sent→Paid`, `Sent→Overdue`,
/// and any non-terminal status to `Cancelled`. `Paid` and `Cancelled` are
/// terminal; no transition (including a self-transition) leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Invoice is being drafted and has not been sent to the client.
    Draft,
    /// Invoice has been sent and awaits payment.
    Sent,
    /// Invoice has been paid in full (terminal).
    Paid,
    /// Invoice passed its due date without payment.
    Overdue,
    /// Invoice was cancelled (terminal).
    Cancelled,
}

impl InvoiceStatus {
    /// Every status, in lifecycle order. Used for zero-filled breakdowns.
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Sent,
        Self::Paid,
        Self::Overdue,
        Self::Cancelled,
    ];

    /// Returns true if no transition may leave this status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }

    /// Returns true if the state machine permits moving to `next`.
    #[must_use]
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Sent)
                | (Self::Sent, Self::Paid)
                | (Self::Sent, Self::Overdue)
                | (Self::Draft | Self::Sent | Self::Overdue, Self::Cancelled)
        )
    }

    /// Returns true if invoices in this status count toward revenue.
    #[must_use]
    pub fn counts_as_revenue(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Sent => write!(f, "Sent"),
            Self::Paid => write!(f, "Paid"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A single line on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// What was delivered.
    pub description: String,
    /// Quantity delivered (must be positive; fractional quantities such as
    /// hours are legal).
    pub quantity: Decimal,
    /// Price per unit (must be non-negative).
    pub unit_price: Decimal,
    /// Optional category label for per-category revenue aggregation.
    pub category: Option<String>,
}

impl LineItem {
    /// The line subtotal: quantity × unit price, rounded to money precision
    /// with Banker's Rounding.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        round_money(self.quantity * self.unit_price)
    }
}

/// An invoice issued to a client.
///
/// The total is never stored: [`Invoice::total`] recomputes it from the line
/// items, so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier, immutable once assigned.
    pub id: InvoiceId,
    /// Client the invoice is billed to.
    pub client: String,
    /// Date the invoice was issued.
    pub issue_date: NaiveDate,
    /// Date payment is due (never before the issue date).
    pub due_date: NaiveDate,
    /// Ordered line items (never empty).
    pub line_items: Vec<LineItem>,
    /// Current lifecycle status.
    pub status: InvoiceStatus,
}

impl Invoice {
    /// The invoice total: the sum of all line subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.line_items.iter().map(LineItem::subtotal).sum()
    }
}

/// A recorded business expense. Expenses have no status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, immutable once assigned.
    pub id: ExpenseId,
    /// Date the expense occurred.
    pub date: NaiveDate,
    /// Free-form category label (aggregation groups it case-insensitively).
    pub category: String,
    /// Amount spent (non-negative).
    pub amount: Decimal,
    /// What the money was spent on.
    pub description: String,
}

/// Caller-supplied fields for a new invoice, prior to validation.
///
/// The store assigns the identifier and the initial `Draft` status; neither
/// is part of the draft.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    /// Client the invoice is billed to.
    pub client: String,
    /// Date the invoice is issued.
    pub issue_date: NaiveDate,
    /// Date payment is due.
    pub due_date: NaiveDate,
    /// Proposed line items.
    pub line_items: Vec<LineItem>,
}

/// Caller-supplied fields for a new expense, prior to validation.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    /// Date the expense occurred.
    pub date: NaiveDate,
    /// Free-form category label.
    pub category: String,
    /// Amount spent.
    pub amount: Decimal,
    /// What the money was spent on.
    pub description: String,
}

/// Field-level update for an invoice. `None` fields keep their current
/// value. The identifier and status cannot be patched; status changes go
/// through the state machine.
#[derive(Debug, Clone, Default)]
pub struct InvoicePatch {
    /// New client name, if changing.
    pub client: Option<String>,
    /// New issue date, if changing.
    pub issue_date: Option<NaiveDate>,
    /// New due date, if changing.
    pub due_date: Option<NaiveDate>,
    /// Replacement line items, if changing.
    pub line_items: Option<Vec<LineItem>>,
}

/// Field-level update for an expense. `None` fields keep their current
/// value.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    /// New expense date, if changing.
    pub date: Option<NaiveDate>,
    /// New category label, if changing.
    pub category: Option<String>,
    /// New amount, if changing.
    pub amount: Option<Decimal>,
    /// New description, if changing.
    pub description: Option<String>,
}

/// An inclusive, optionally unbounded date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive lower bound; `None` means unbounded.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound; `None` means unbounded.
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// A range with both bounds set.
    #[must_use]
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// An unbounded range matching every date.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}
