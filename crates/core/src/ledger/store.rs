//! The record store owning all invoices and expenses.
//!
//! The store is the single mutable resource in the engine. Mutation requires
//! `&mut self` and reads hand out owned clones, so internal state is never
//! exposed by reference and a caller mutating a returned record cannot
//! corrupt the ledger. A failed operation leaves the store untouched:
//! validation always completes before anything is committed.

use tallybook_shared::types::{ExpenseId, InvoiceId};

use crate::snapshot::Snapshot;

use super::error::LedgerError;
use super::types::{
    Expense, ExpenseDraft, ExpensePatch, Invoice, InvoiceDraft, InvoicePatch, InvoiceStatus,
};
use super::validation::{validate_expense_draft, validate_invoice_draft};

/// In-memory store of invoices and expenses, held in creation order.
///
/// Every successful mutating operation marks the store dirty so a
/// persistence coordinator knows a flush is due; the store itself performs
/// no I/O.
#[derive(Debug, Default)]
pub struct RecordStore {
    invoices: Vec<Invoice>,
    expenses: Vec<Expense>,
    dirty: bool,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a previously persisted snapshot.
    ///
    /// Snapshot contents were validated when first accepted, so they are
    /// trusted here. A freshly loaded store is clean.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            invoices: snapshot.invoices,
            expenses: snapshot.expenses,
            dirty: false,
        }
    }

    /// Captures the full store contents for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            invoices: self.invoices.clone(),
            expenses: self.expenses.clone(),
        }
    }

    // ========== Invoices ==========

    /// Validates a draft, assigns a fresh identifier, and stores the new
    /// invoice with status `Draft`.
    ///
    /// # Errors
    ///
    /// Returns a validation [`LedgerError`] and leaves the store unchanged
    /// if the draft is invalid.
    pub fn add_invoice(&mut self, draft: InvoiceDraft) -> Result<Invoice, LedgerError> {
        validate_invoice_draft(&draft)?;

        let invoice = Invoice {
            id: InvoiceId::new(),
            client: draft.client,
            issue_date: draft.issue_date,
            due_date: draft.due_date,
            line_items: draft.line_items,
            status: InvoiceStatus::Draft,
        };
        self.invoices.push(invoice.clone());
        self.dirty = true;
        Ok(invoice)
    }

    /// Merges a patch over an existing invoice, re-validates the merged
    /// result, and commits it. The identifier and status are untouched.
    ///
    /// # Errors
    ///
    /// `InvoiceNotFound` if the id is absent; a validation error (with the
    /// store unchanged) if the merged record is invalid.
    pub fn update_invoice(
        &mut self,
        id: InvoiceId,
        patch: InvoicePatch,
    ) -> Result<Invoice, LedgerError> {
        let index = self.invoice_index(id)?;
        let current = &self.invoices[index];

        let merged = InvoiceDraft {
            client: patch.client.unwrap_or_else(|| current.client.clone()),
            issue_date: patch.issue_date.unwrap_or(current.issue_date),
            due_date: patch.due_date.unwrap_or(current.due_date),
            line_items: patch
                .line_items
                .unwrap_or_else(|| current.line_items.clone()),
        };
        validate_invoice_draft(&merged)?;

        let invoice = Invoice {
            id,
            client: merged.client,
            issue_date: merged.issue_date,
            due_date: merged.due_date,
            line_items: merged.line_items,
            status: current.status,
        };
        self.invoices[index] = invoice.clone();
        self.dirty = true;
        Ok(invoice)
    }

    /// Permanently removes an invoice.
    ///
    /// # Errors
    ///
    /// `InvoiceNotFound` if the id is absent.
    pub fn delete_invoice(&mut self, id: InvoiceId) -> Result<(), LedgerError> {
        let index = self.invoice_index(id)?;
        self.invoices.remove(index);
        self.dirty = true;
        Ok(())
    }

    /// Moves an invoice to a new status.
    ///
    /// # Errors
    ///
    /// `InvoiceNotFound` if the id is absent; `InvalidTransition` if the
    /// state machine does not permit the change.
    pub fn set_invoice_status(
        &mut self,
        id: InvoiceId,
        new_status: InvoiceStatus,
    ) -> Result<Invoice, LedgerError> {
        let index = self.invoice_index(id)?;
        let current = self.invoices[index].status;

        if !current.can_transition_to(new_status) {
            return Err(LedgerError::InvalidTransition {
                from: current,
                to: new_status,
            });
        }

        self.invoices[index].status = new_status;
        self.dirty = true;
        Ok(self.invoices[index].clone())
    }

    /// Looks up a single invoice.
    ///
    /// # Errors
    ///
    /// `InvoiceNotFound` if the id is absent.
    pub fn invoice(&self, id: InvoiceId) -> Result<Invoice, LedgerError> {
        self.invoices
            .iter()
            .find(|invoice| invoice.id == id)
            .cloned()
            .ok_or(LedgerError::InvoiceNotFound(id))
    }

    /// All invoices in creation order, as a mutation-isolated snapshot.
    #[must_use]
    pub fn invoices(&self) -> Vec<Invoice> {
        self.invoices.clone()
    }

    // ========== Expenses ==========

    /// Validates a draft, assigns a fresh identifier, and stores the new
    /// expense.
    ///
    /// # Errors
    ///
    /// Returns a validation [`LedgerError`] and leaves the store unchanged
    /// if the draft is invalid.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<Expense, LedgerError> {
        validate_expense_draft(&draft)?;

        let expense = Expense {
            id: ExpenseId::new(),
            date: draft.date,
            category: draft.category,
            amount: draft.amount,
            description: draft.description,
        };
        self.expenses.push(expense.clone());
        self.dirty = true;
        Ok(expense)
    }

    /// Merges a patch over an existing expense, re-validates the merged
    /// result, and commits it.
    ///
    /// # Errors
    ///
    /// `ExpenseNotFound` if the id is absent; a validation error (with the
    /// store unchanged) if the merged record is invalid.
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        patch: ExpensePatch,
    ) -> Result<Expense, LedgerError> {
        let index = self.expense_index(id)?;
        let current = &self.expenses[index];

        let merged = ExpenseDraft {
            date: patch.date.unwrap_or(current.date),
            category: patch.category.unwrap_or_else(|| current.category.clone()),
            amount: patch.amount.unwrap_or(current.amount),
            description: patch
                .description
                .unwrap_or_else(|| current.description.clone()),
        };
        validate_expense_draft(&merged)?;

        let expense = Expense {
            id,
            date: merged.date,
            category: merged.category,
            amount: merged.amount,
            description: merged.description,
        };
        self.expenses[index] = expense.clone();
        self.dirty = true;
        Ok(expense)
    }

    /// Permanently removes an expense.
    ///
    /// # Errors
    ///
    /// `ExpenseNotFound` if the id is absent.
    pub fn delete_expense(&mut self, id: ExpenseId) -> Result<(), LedgerError> {
        let index = self.expense_index(id)?;
        self.expenses.remove(index);
        self.dirty = true;
        Ok(())
    }

    /// Looks up a single expense.
    ///
    /// # Errors
    ///
    /// `ExpenseNotFound` if the id is absent.
    pub fn expense(&self, id: ExpenseId) -> Result<Expense, LedgerError> {
        self.expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
            .ok_or(LedgerError::ExpenseNotFound(id))
    }

    /// All expenses in creation order, as a mutation-isolated snapshot.
    #[must_use]
    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    // ========== Dirty tracking ==========

    /// Returns true if the store has mutations not yet flushed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag after a successful flush.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn invoice_index(&self, id: InvoiceId) -> Result<usize, LedgerError> {
        self.invoices
            .iter()
            .position(|invoice| invoice.id == id)
            .ok_or(LedgerError::InvoiceNotFound(id))
    }

    fn expense_index(&self, id: ExpenseId) -> Result<usize, LedgerError> {
        self.expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(LedgerError::ExpenseNotFound(id))
    }
}
