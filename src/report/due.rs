use indexmap::IndexMap;
use serde::Serialize;

use crate::ledger::DueEntry;

/// A debit transaction with its outstanding balance
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DueRow {
    #[serde(flatten)]
    pub entry: DueEntry,
    #[serde(rename = "dueAmount")]
    pub due_amount: f64,
}

/// `<invoice>_<client>`, or `None` when either part is missing
pub fn due_key(entry: &DueEntry) -> Option<String> {
    match (&entry.invoice, &entry.client) {
        (Some(invoice), Some(client)) => Some(format!("{invoice}_{client}")),
        _ => None,
    }
}

/// Running debit-minus-credit total per invoice/client pair
pub fn compute_due(debits: &[DueEntry], credits: &[DueEntry]) -> IndexMap<String, f64> {
    let mut due: IndexMap<String, f64> = IndexMap::new();

    for entry in debits {
        if let Some(key) = due_key(entry) {
            *due.entry(key).or_insert(0.0) += entry.amount;
        }
    }
    for entry in credits {
        if let Some(key) = due_key(entry) {
            *due.entry(key).or_insert(0.0) -= entry.amount;
        }
    }

    due
}

/// Debit rows whose pair still has a strictly positive balance. Rows without
/// an invoice/client key never qualify.
pub fn filter_positive(debits: &[DueEntry], due: &IndexMap<String, f64>) -> Vec<DueRow> {
    debits
        .iter()
        .filter_map(|entry| {
            let due_amount = *due.get(&due_key(entry)?)?;
            (due_amount > 0.0).then(|| DueRow {
                entry: entry.clone(),
                due_amount,
            })
        })
        .collect()
}
