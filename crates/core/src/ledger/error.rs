//! Ledger error types for validation, lookup, and state errors.
//!
//! Every failure the engine reports falls into one of three classes the
//! presentation layer knows how to phrase: validation, not-found, and
//! invalid status transition. The classification predicates below exist so
//! callers never match on individual variants just to pick a message tone.

use chrono::NaiveDate;
use thiserror::Error;

use tallybook_shared::types::{ExpenseId, InvoiceId};

use super::types::InvoiceStatus;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Invoice client name is empty.
    #[error("Client name must not be empty")]
    EmptyClientName,

    /// Invoice has no line items.
    #[error("Invoice must have at least one line item")]
    NoLineItems,

    /// Line item quantity is zero or negative.
    #[error("Line {line}: quantity must be positive")]
    NonPositiveQuantity {
        /// 1-based index of the offending line item.
        line: usize,
    },

    /// Line item unit price is negative.
    #[error("Line {line}: unit price must not be negative")]
    NegativeUnitPrice {
        /// 1-based index of the offending line item.
        line: usize,
    },

    /// Invoice due date precedes its issue date.
    #[error("Due date {due_date} is before issue date {issue_date}")]
    DueBeforeIssue {
        /// The invoice issue date.
        issue_date: NaiveDate,
        /// The offending due date.
        due_date: NaiveDate,
    },

    /// Expense amount is negative.
    #[error("Expense amount must not be negative")]
    NegativeAmount,

    /// Expense category is empty.
    #[error("Expense category must not be empty")]
    EmptyCategory,

    /// Expense description is empty.
    #[error("Expense description must not be empty")]
    EmptyDescription,

    // ========== Not Found Errors ==========
    /// Invoice not found.
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),

    /// Expense not found.
    #[error("Expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    // ========== Transition Errors ==========
    /// Status change not permitted by the invoice state machine.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// The invoice's current status.
        from: InvoiceStatus,
        /// The requested status.
        to: InvoiceStatus,
    },
}

impl LedgerError {
    /// Returns the error code for presentation-layer messages.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyClientName => "EMPTY_CLIENT_NAME",
            Self::NoLineItems => "NO_LINE_ITEMS",
            Self::NonPositiveQuantity { .. } => "NON_POSITIVE_QUANTITY",
            Self::NegativeUnitPrice { .. } => "NEGATIVE_UNIT_PRICE",
            Self::DueBeforeIssue { .. } => "DUE_BEFORE_ISSUE",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::EmptyCategory => "EMPTY_CATEGORY",
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::InvoiceNotFound(_) => "INVOICE_NOT_FOUND",
            Self::ExpenseNotFound(_) => "EXPENSE_NOT_FOUND",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }

    /// Returns true if this is a record-content validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !self.is_not_found() && !self.is_invalid_transition()
    }

    /// Returns true if the operation referenced an unknown identifier.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InvoiceNotFound(_) | Self::ExpenseNotFound(_))
    }

    /// Returns true if a status change was rejected by the state machine.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}
