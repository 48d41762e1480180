//! Round-trip tests for the JSON snapshot adapter.
//!
//! The persistence contract requires a lossless round trip of every record
//! field, including line-item order within an invoice and decimal amount
//! precision.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::tempdir;

use tallybook_core::ledger::types::{
    Expense, ExpenseDraft, Invoice, InvoiceDraft, InvoiceStatus, LineItem,
};
use tallybook_core::ledger::RecordStore;
use tallybook_core::snapshot::{Snapshot, SnapshotStore};
use tallybook_persistence::JsonSnapshotStore;
use tallybook_shared::types::{ExpenseId, InvoiceId};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_snapshot() -> Snapshot {
    Snapshot {
        invoices: vec![Invoice {
            id: InvoiceId::new(),
            client: "Acme Widgets, Ltd.".to_string(),
            issue_date: date(2024, 1, 10),
            due_date: date(2024, 2, 10),
            line_items: vec![
                LineItem {
                    description: "Consulting, on-site".to_string(),
                    quantity: dec!(1.5),
                    unit_price: dec!(99.99),
                    category: Some("Services".to_string()),
                },
                LineItem {
                    description: "Shipping".to_string(),
                    quantity: dec!(1),
                    unit_price: dec!(5.00),
                    category: None,
                },
            ],
            status: InvoiceStatus::Sent,
        }],
        expenses: vec![Expense {
            id: ExpenseId::new(),
            date: date(2024, 1, 5),
            category: "Office".to_string(),
            amount: dec!(25.50),
            description: "Printer paper \"A4\"".to_string(),
        }],
    }
}

#[test]
fn saved_snapshot_loads_field_for_field() {
    let dir = tempdir().unwrap();
    let adapter = JsonSnapshotStore::new(dir.path().join("ledger.json"));

    let snapshot = sample_snapshot();
    adapter.save(&snapshot).unwrap();
    let loaded = adapter.load().unwrap();

    assert_eq!(loaded, snapshot);
    // Line-item order and decimal scale survive exactly.
    assert_eq!(loaded.invoices[0].line_items[0].quantity, dec!(1.5));
    assert_eq!(loaded.invoices[0].line_items[1].description, "Shipping");
    assert_eq!(loaded.expenses[0].amount.to_string(), "25.50");
}

#[test]
fn loading_missing_file_yields_empty_snapshot() {
    let dir = tempdir().unwrap();
    let adapter = JsonSnapshotStore::new(dir.path().join("absent.json"));

    let loaded = adapter.load().unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn save_replaces_previous_snapshot() {
    let dir = tempdir().unwrap();
    let adapter = JsonSnapshotStore::new(dir.path().join("ledger.json"));

    adapter.save(&sample_snapshot()).unwrap();
    adapter.save(&Snapshot::default()).unwrap();

    assert!(adapter.load().unwrap().is_empty());
}

#[test]
fn loading_corrupt_file_reports_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let adapter = JsonSnapshotStore::new(path);
    let err = adapter.load().unwrap_err();
    assert!(err.to_string().contains("serialization"));
}

#[test]
fn store_roundtrips_through_adapter() {
    let dir = tempdir().unwrap();
    let adapter = JsonSnapshotStore::new(dir.path().join("ledger.json"));

    let mut store = RecordStore::new();
    store
        .add_invoice(InvoiceDraft {
            client: "Globex".to_string(),
            issue_date: date(2024, 3, 1),
            due_date: date(2024, 3, 31),
            line_items: vec![LineItem {
                description: "Retainer".to_string(),
                quantity: dec!(1),
                unit_price: dec!(1200.00),
                category: Some("Services".to_string()),
            }],
        })
        .unwrap();
    store
        .add_expense(ExpenseDraft {
            date: date(2024, 3, 5),
            category: "Travel".to_string(),
            amount: dec!(89.90),
            description: "Train tickets".to_string(),
        })
        .unwrap();

    adapter.save(&store.snapshot()).unwrap();
    store.mark_clean();

    let restored = RecordStore::from_snapshot(adapter.load().unwrap());
    assert_eq!(restored.invoices(), store.invoices());
    assert_eq!(restored.expenses(), store.expenses());
    assert!(!restored.is_dirty());
}
