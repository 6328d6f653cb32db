use indexmap::IndexMap;

use super::row::ReportRow;
use crate::ledger::{JournalLine, ReportType, Side};

/// Tag fetched lines as detail rows on the section's side
pub fn rows_from_lines(report_type: ReportType, lines: &[JournalLine]) -> Vec<ReportRow> {
    let side = report_type.side();
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            ReportRow::detail(
                format!("{}-{}", report_type.segment(), idx),
                line.name.clone(),
                side,
                line.amount,
            )
        })
        .collect()
}

/// Collapse rows sharing a `details` label into the first-seen row, summing
/// the `side` column. Output keeps first-occurrence order and first-seen ids.
pub fn aggregate(rows: Vec<ReportRow>, side: Side) -> Vec<ReportRow> {
    let mut by_label: IndexMap<String, ReportRow> = IndexMap::with_capacity(rows.len());

    for row in rows {
        match by_label.get_mut(&row.details) {
            Some(existing) => {
                let merged =
                    existing.amount(side).unwrap_or(0.0) + row.amount(side).unwrap_or(0.0);
                *existing.amount_mut(side) = Some(merged);
            }
            None => {
                by_label.insert(row.details.clone(), row);
            }
        }
    }

    by_label.into_values().collect()
}
