//! Pure validation of record drafts.
//!
//! Validation runs over caller-supplied drafts before any entity is
//! constructed, so no partially-valid invoice or expense ever exists.
//! The first violation wins; a failed validation has no side effects.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{ExpenseDraft, InvoiceDraft};

/// Validates an invoice draft.
///
/// Checks, in order: non-empty client name, at least one line item, each
/// line's quantity positive and unit price non-negative, and due date not
/// before issue date.
///
/// # Errors
///
/// Returns the first [`LedgerError`] validation variant violated.
pub fn validate_invoice_draft(draft: &InvoiceDraft) -> Result<(), LedgerError> {
    if draft.client.trim().is_empty() {
        return Err(LedgerError::EmptyClientName);
    }

    if draft.line_items.is_empty() {
        return Err(LedgerError::NoLineItems);
    }

    for (index, line) in draft.line_items.iter().enumerate() {
        if line.quantity <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveQuantity { line: index + 1 });
        }
        if line.unit_price < Decimal::ZERO {
            return Err(LedgerError::NegativeUnitPrice { line: index + 1 });
        }
    }

    if draft.due_date < draft.issue_date {
        return Err(LedgerError::DueBeforeIssue {
            issue_date: draft.issue_date,
            due_date: draft.due_date,
        });
    }

    Ok(())
}

/// Validates an expense draft.
///
/// Checks a non-negative amount and non-empty category and description.
///
/// # Errors
///
/// Returns the first [`LedgerError`] validation variant violated.
pub fn validate_expense_draft(draft: &ExpenseDraft) -> Result<(), LedgerError> {
    if draft.amount < Decimal::ZERO {
        return Err(LedgerError::NegativeAmount);
    }

    if draft.category.trim().is_empty() {
        return Err(LedgerError::EmptyCategory);
    }

    if draft.description.trim().is_empty() {
        return Err(LedgerError::EmptyDescription);
    }

    Ok(())
}
