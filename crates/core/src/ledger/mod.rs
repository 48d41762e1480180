//! Invoice and expense records.
//!
//! This module implements the record-keeping half of the engine:
//! - Domain types for invoices, line items, and expenses
//! - Draft and patch types for record creation and update
//! - Pure validation of drafts before any entity is constructed
//! - The record store owning all records and enforcing invariants
//! - Error types for ledger operations

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::LedgerError;
pub use store::RecordStore;
pub use types::{
    DateRange, Expense, ExpenseDraft, ExpensePatch, Invoice, InvoiceDraft, InvoicePatch,
    InvoiceStatus, LineItem,
};
pub use validation::{validate_expense_draft, validate_invoice_draft};
