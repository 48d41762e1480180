//! CSV export of the ledger.
//!
//! Produces one file with two sections, the layout the desktop app's
//! "Export CSV" action has always written: an `Invoices` table, a blank
//! row, then an `Expenses` table. Dates are `%Y-%m-%d`; amounts carry two
//! decimals.

use std::io::Write;

use thiserror::Error;
use tracing::debug;

use tallybook_core::ledger::types::{Expense, Invoice};

/// Errors the CSV export can report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing a CSV record failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the underlying writer failed.
    #[error("CSV I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the two-section ledger CSV to the given writer.
///
/// Records are written in the order given, which for store snapshots is
/// creation order.
///
/// # Errors
///
/// Returns [`ExportError`] if the underlying writer fails.
pub fn write_ledger_csv<W: Write>(
    writer: W,
    invoices: &[Invoice],
    expenses: &[Expense],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record(["Invoices"])?;
    csv_writer.write_record(["ID", "Client", "Issue Date", "Due Date", "Total", "Status"])?;
    for invoice in invoices {
        csv_writer.write_record([
            invoice.id.to_string(),
            invoice.client.clone(),
            invoice.issue_date.format("%Y-%m-%d").to_string(),
            invoice.due_date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", invoice.total()),
            invoice.status.to_string(),
        ])?;
    }

    csv_writer.write_record([""])?;

    csv_writer.write_record(["Expenses"])?;
    csv_writer.write_record(["ID", "Category", "Description", "Date", "Amount"])?;
    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.category.clone(),
            expense.description.clone(),
            expense.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", expense.amount),
        ])?;
    }

    csv_writer.flush()?;
    debug!(
        invoices = invoices.len(),
        expenses = expenses.len(),
        "ledger exported to CSV"
    );
    Ok(())
}
