//! Canonical category normalization and derivation.
//!
//! Categories are not stored entities: they are derived from the labels
//! observed on expenses and categorized invoice line items. Aggregation
//! groups labels case-insensitively via a normalization key while keeping a
//! human-readable display form.
//!
//! The canonical rule: the grouping key is the label trimmed of surrounding
//! whitespace and Unicode-lowercased; the display form is the trimmed label
//! as first observed in creation order.

use crate::ledger::RecordStore;

/// The case-insensitive grouping key for a category label.
#[must_use]
pub fn normalize_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// The display form of a category label.
#[must_use]
pub fn display_label(label: &str) -> String {
    label.trim().to_string()
}

/// All distinct categories observed in the store, as sorted display forms.
///
/// Labels differing only in case or surrounding whitespace collapse into
/// one entry, shown in the form first observed in creation order.
#[must_use]
pub fn distinct_categories(store: &RecordStore) -> Vec<String> {
    let mut seen: Vec<(String, String)> = Vec::new();

    let mut observe = |label: &str| {
        let key = normalize_key(label);
        if key.is_empty() {
            return;
        }
        if !seen.iter().any(|(existing, _)| *existing == key) {
            seen.push((key, display_label(label)));
        }
    };

    for expense in store.expenses() {
        observe(&expense.category);
    }
    for invoice in store.invoices() {
        for line in &invoice.line_items {
            if let Some(category) = &line.category {
                observe(category);
            }
        }
    }

    let mut labels: Vec<String> = seen.into_iter().map(|(_, display)| display).collect();
    labels.sort();
    labels
}
